use anyhow::{Result, bail};

/// Asks the running site to forward `url` to IndexNow.
pub async fn indexnow(config: crate::config::Config, url: String) -> Result<()> {
    let base_url = config.site.public_url;

    if !crate::indexnow::notify_index_now(&url, &base_url).await {
        bail!("IndexNow submission of {url} through {base_url} failed");
    }

    tracing::info!(url, "Submitted to IndexNow");

    Ok(())
}
