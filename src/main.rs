use logboard::orbit::Animator;
use logboard::ui::TermCanvas;
use logboard::{DashConfig, Dashboard};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = DashConfig::from_env();
    info!(
        base_url = %config.base_url,
        poll_secs = config.poll_interval.as_secs(),
        hud = config.hud,
        "starting dashboard"
    );

    let dashboard = Dashboard::new(config.clone());
    let animator = config.hud.then(|| {
        Animator::start(
            dashboard.state.clone(),
            config.frame_interval,
            TermCanvas::stdout(),
        )
    });

    tokio::select! {
        _ = dashboard.run() => {}
        _ = tokio::signal::ctrl_c() => info!("shutting down"),
    }

    if let Some(animator) = animator {
        animator.stop().await;
    }

    Ok(())
}
