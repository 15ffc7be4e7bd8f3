use std::str::FromStr;

use crate::server::error::config::ConfigError;

/// Notice letter sent to debtors.
///
/// The five `{}` placeholders are filled in order with: owner full name, address with apartment
/// number, owner full name, total debt, and the list of unpaid bills.
pub const DEFAULT_DEBTOR_MESSAGE_TEMPLATE: &str = "
                                                                  кому: {}
                                                                        {}
                                                                  от: ООО УК Управдом

                            Уведомление о просроченной задолженности.

Уважаемый(ая) {}, ООО УК Управдом сообщает о наличии у Вас задолженности в общем размере {}:
{}

В случае не погашения задолженности в течение 30-ти дней, управляющая компания оставляет за собой право отключить
Вашу квартиру от коммуникаций и обратиться в мировой суд в заявлением о взыскании с Вас коммунальной задолжености.

К сожалению, в такой ситуации до момента поступления денежных средств на счет управляющей компании, вы останетесь
без электричества, воды и отопления.

Надеемся на Ваше понимание и своевременную оплату.

С уважением,
директор ООО УК Управдом
Курицын Александр Всеволодович
";

pub const DEFAULT_API_TITLE: &str = "ООО УК Управдом";
pub const DEFAULT_APP_VERSION: &str = "0.0.0";
pub const DEFAULT_CACHE_LIFETIME_SECS: u64 = 60;
pub const DEFAULT_PATH_NOT_REQUIRE_AUTH: &str = "/docs,/openapi.json";

pub struct Config {
    pub database_url: String,
    pub sql_schema: String,
    pub host: String,
    pub port: u16,
    pub api_title: String,
    pub app_version: String,
    pub is_debug: bool,
    pub cache_lifetime_secs: u64,
    pub valkey_url: Option<String>,
    pub path_not_require_auth: Vec<String>,
    pub api_key: Option<String>,
    pub debtor_message_template: String,
    pub admin_login: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    /// Reads the configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of a variable if set
    ///
    /// Empty values are treated as unset.
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let sql_schema = get("SQL_SCHEMA").unwrap_or_else(|| "public".to_string());
        if !sql_schema
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(ConfigError::InvalidEnvValue {
                var: "SQL_SCHEMA".to_string(),
                reason: "only ASCII letters, digits and underscores are allowed".to_string(),
            });
        }

        Ok(Self {
            database_url: get("DATABASE_URL")
                .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            sql_schema,
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or("PORT", get("PORT"), 8000)?,
            api_title: get("SWAGGER_TITLE").unwrap_or_else(|| DEFAULT_API_TITLE.to_string()),
            app_version: get("APP_VERSION").unwrap_or_else(|| DEFAULT_APP_VERSION.to_string()),
            is_debug: parse_bool("IS_DEBUG", get("IS_DEBUG"))?,
            cache_lifetime_secs: parse_or(
                "CACHE_LIFETIME",
                get("CACHE_LIFETIME"),
                DEFAULT_CACHE_LIFETIME_SECS,
            )?,
            valkey_url: get("VALKEY_URL"),
            path_not_require_auth: split_paths(
                &get("PATH_NOT_REQUIRE_AUTH")
                    .unwrap_or_else(|| DEFAULT_PATH_NOT_REQUIRE_AUTH.to_string()),
            ),
            api_key: get("API_KEY"),
            debtor_message_template: get("DEBTOR_MESSAGE_TEMPLATE")
                .unwrap_or_else(|| DEFAULT_DEBTOR_MESSAGE_TEMPLATE.to_string()),
            admin_login: get("ADMIN_LOGIN"),
            admin_password: get("ADMIN_PASSWORD"),
        })
    }
}

fn parse_or<T>(var: &str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        None => Ok(default),
    }
}

fn parse_bool(var: &str, value: Option<String>) -> Result<bool, ConfigError> {
    match value.as_deref().map(|v| v.trim().to_ascii_lowercase()) {
        None => Ok(false),
        Some(v) => match v.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: format!("expected a boolean, got {:?}", v),
            }),
        },
    }
}

fn split_paths(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(str::to_string)
        .collect()
}
