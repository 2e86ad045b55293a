use std::sync::Arc;

use crate::{
    config::Config,
    data::{deploy::ShellRedeployer, hackthebox::HackTheBoxClient},
    error::AppError,
    service::{category::CategoryCache, update::AdminAllowList},
    state::BotState,
};

/// Builds the HTTP client used for catalog requests.
///
/// Redirects are disabled so the bearer token is never forwarded to another host.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend or client initialization failed
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Wires the catalog client, category cache, allow-list and redeployer from configuration.
pub fn build_state(config: &Config, http_client: reqwest::Client) -> BotState {
    let catalog = HackTheBoxClient::new(
        http_client,
        config.hackthebox_api_url.clone(),
        config.hackthebox_token.clone(),
    );

    BotState::new(
        Arc::new(catalog),
        CategoryCache::new(&config.panorama_category),
        AdminAllowList::new(config.admin_user_ids.iter().copied()),
        Arc::new(ShellRedeployer::new(config.update_command.clone())),
    )
}
