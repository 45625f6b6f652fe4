//! Cosmetic delays shared by the panels.

/// Length of the slide-out transition; selection is cleared after it.
pub const PANEL_EXIT_MS: u64 = 300;

/// How long a successful upload message stays on screen.
pub const UPLOAD_STATUS_CLEAR_MS: u64 = 5_000;

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
