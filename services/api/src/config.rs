use anyhow::{anyhow, Context, Result};
use url::Url;

const DEFAULT_PG_PORT: u16 = 5432;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub fx_rates_url: String,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup.
    ///
    /// `DATABASE_URL` wins; otherwise the URL is assembled from the `PG_*`
    /// variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => database_url_from_parts(&lookup)?,
        };

        Ok(Self {
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("PORT must be a valid port number")?,
            database_url,
            fx_rates_url: lookup("FX_RATES_URL")
                .unwrap_or_else(|| fx_rates::DEFAULT_BASE_URL.to_string()),
            environment: lookup("ENVIRONMENT")
                .unwrap_or_else(|| "development".to_string()),
        })
    }
}

fn database_url_from_parts(lookup: &impl Fn(&str) -> Option<String>) -> Result<String> {
    let host = lookup("PG_HOST").context("DATABASE_URL or PG_HOST must be set")?;
    let database = lookup("PG_DATABASE").context("PG_DATABASE must be set")?;
    let user = lookup("PG_USER").context("PG_USER must be set")?;
    let port = match lookup("PG_PORT") {
        Some(port) => port.parse().context("PG_PORT must be a valid port number")?,
        None => DEFAULT_PG_PORT,
    };

    let mut url = Url::parse(&format!("postgres://{host}"))
        .with_context(|| format!("PG_HOST is not a valid host: {host}"))?;
    url.set_port(Some(port))
        .map_err(|_| anyhow!("cannot set port on {host}"))?;
    url.set_username(&user)
        .map_err(|_| anyhow!("cannot set user on {host}"))?;
    url.set_password(lookup("PG_PASSWORD").as_deref())
        .map_err(|_| anyhow!("cannot set password on {host}"))?;
    url.set_path(&database);

    Ok(url.to_string())
}
