use serde::Deserialize;
use time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub expires_in_secs: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub bcrypt_cost: u32,
    pub jwt: JwtConfig,
}

const DEFAULT_EXPIRES_IN_SECS: i64 = 7 * 24 * 60 * 60;
pub const DEFAULT_BCRYPT_COST: u32 = 12;

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")
                .map_err(|_| anyhow::anyhow!("JWT_SECRET is not defined"))?,
            expires_in_secs: std::env::var("JWT_EXPIRES_IN")
                .ok()
                .and_then(|v| parse_expires_in(&v))
                .unwrap_or(DEFAULT_EXPIRES_IN_SECS),
        };
        Ok(Self {
            database_url,
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(3000),
            bcrypt_cost: std::env::var("BCRYPT_SALT_ROUNDS")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(DEFAULT_BCRYPT_COST),
            jwt,
        })
    }

    pub fn token_ttl(&self) -> Duration {
        Duration::seconds(self.jwt.expires_in_secs)
    }
}

/// Parses expiry strings like `7d`, `12h`, `30m`, `45s`, or raw seconds.
fn parse_expires_in(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(secs) = raw.parse::<i64>() {
        return (secs > 0).then_some(secs);
    }
    let (value, unit) = raw.split_at(raw.len() - 1);
    let value = value.parse::<i64>().ok().filter(|v| *v > 0)?;
    let factor = match unit {
        "s" => 1,
        "m" => 60,
        "h" => 60 * 60,
        "d" => 24 * 60 * 60,
        _ => return None,
    };
    Some(value * factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_day_hour_minute_second_units() {
        assert_eq!(parse_expires_in("7d"), Some(604_800));
        assert_eq!(parse_expires_in("12h"), Some(43_200));
        assert_eq!(parse_expires_in("30m"), Some(1_800));
        assert_eq!(parse_expires_in("45s"), Some(45));
    }

    #[test]
    fn parses_raw_seconds() {
        assert_eq!(parse_expires_in("3600"), Some(3600));
    }

    #[test]
    fn rejects_garbage_and_non_positive() {
        assert_eq!(parse_expires_in(""), None);
        assert_eq!(parse_expires_in("soon"), None);
        assert_eq!(parse_expires_in("-7d"), None);
        assert_eq!(parse_expires_in("0"), None);
        assert_eq!(parse_expires_in("7w"), None);
    }
}
