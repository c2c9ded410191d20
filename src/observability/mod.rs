pub mod error_tracking;

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Default)]
pub struct AppMetrics {
    request_count: AtomicU64,
    error_count: AtomicU64,
    latency_total_ms: AtomicU64,
    latency_count: AtomicU64,
    listings_total: AtomicU64,
    ranked_listings_total: AtomicU64,
    masjids_created_total: AtomicU64,
}

impl AppMetrics {
    pub fn record_request(&self, status: u16, latency_ms: u64) {
        self.request_count.fetch_add(1, Ordering::Relaxed);
        if status >= 500 {
            self.error_count.fetch_add(1, Ordering::Relaxed);
        }
        self.latency_total_ms
            .fetch_add(latency_ms, Ordering::Relaxed);
        self.latency_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Counts a directory listing; `ranked` is true when the caller sent a position.
    pub fn record_listing(&self, ranked: bool) {
        self.listings_total.fetch_add(1, Ordering::Relaxed);
        if ranked {
            self.ranked_listings_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_masjids_created(&self, count: u64) {
        self.masjids_created_total
            .fetch_add(count, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self, db_size: u32, db_idle: usize) -> String {
        let count = self.latency_count.load(Ordering::Relaxed).max(1);
        let avg_latency = self.latency_total_ms.load(Ordering::Relaxed) as f64 / count as f64;

        format!(
            concat!(
                "# TYPE http_requests_total counter\n",
                "http_requests_total {}\n",
                "# TYPE http_error_total counter\n",
                "http_error_total {}\n",
                "# TYPE http_latency_avg_ms gauge\n",
                "http_latency_avg_ms {:.2}\n",
                "# TYPE masjid_listings_total counter\n",
                "masjid_listings_total {}\n",
                "# TYPE masjid_ranked_listings_total counter\n",
                "masjid_ranked_listings_total {}\n",
                "# TYPE masjids_created_total counter\n",
                "masjids_created_total {}\n",
                "# TYPE db_pool_size gauge\n",
                "db_pool_size {}\n",
                "# TYPE db_pool_idle gauge\n",
                "db_pool_idle {}\n",
            ),
            self.request_count.load(Ordering::Relaxed),
            self.error_count.load(Ordering::Relaxed),
            avg_latency,
            self.listings_total.load(Ordering::Relaxed),
            self.ranked_listings_total.load(Ordering::Relaxed),
            self.masjids_created_total.load(Ordering::Relaxed),
            db_size,
            db_idle,
        )
    }
}
