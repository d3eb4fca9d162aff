//! Account branding: the canonical schema, the legacy adapter, and the
//! resolved form the section resolver consumes.
//!
//! Two layouts exist in stored accounts:
//!
//! | version | fields                                                        |
//! |---------|---------------------------------------------------------------|
//! | 1       | `palette: {primary, secondary}` + `logo_url`                  |
//! | 2       | `branding_config: {colors: {primary, secondary}, logo: {url, alt}}` |
//!
//! Version 2 is canonical. Version 1 records go through
//! [`BrandingConfig::from_legacy`] on read and can be rewritten for good with
//! [`migrate_account`].

use serde::{Deserialize, Serialize};

use crate::types::AccountRecord;

/// Current canonical branding schema version.
pub const BRANDING_VERSION: u32 = 2;

fn current_version() -> u32 {
    BRANDING_VERSION
}

/// Version 1 flat palette.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyPalette {
    /// Used as the section background colour
    #[serde(default)]
    pub primary: Option<String>,
    /// Used as the section text colour
    #[serde(default)]
    pub secondary: Option<String>,
}

/// Brand colours of the canonical schema.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandColors {
    /// Background colour fallback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    /// Text colour fallback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
}

/// Brand logo of the canonical schema.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandLogo {
    /// Image location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Alt text; the account name is used when missing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Canonical (version 2) branding configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandingConfig {
    /// Schema version, [`BRANDING_VERSION`] for anything written by this crate
    #[serde(default = "current_version")]
    pub version: u32,
    /// Brand colours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<BrandColors>,
    /// Brand logo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<BrandLogo>,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            version: BRANDING_VERSION,
            colors: None,
            logo: None,
        }
    }
}

impl BrandingConfig {
    /// Convert a version 1 palette and logo URL into the canonical shape.
    ///
    /// The legacy layout has no logo alt text, so the migrated logo leaves it
    /// unset and the account name fills in at resolve time.
    pub fn from_legacy(palette: Option<&LegacyPalette>, logo_url: Option<&str>) -> Self {
        let colors = palette
            .map(|p| BrandColors {
                primary: non_empty(p.primary.as_deref()),
                secondary: non_empty(p.secondary.as_deref()),
            })
            .filter(|c| c.primary.is_some() || c.secondary.is_some());

        let logo = non_empty(logo_url).map(|url| BrandLogo {
            url: Some(url),
            alt: None,
        });

        Self {
            version: BRANDING_VERSION,
            colors,
            logo,
        }
    }

    /// True when the config carries nothing a resolver could apply.
    pub fn is_empty(&self) -> bool {
        let no_colors = self
            .colors
            .as_ref()
            .is_none_or(|c| non_empty(c.primary.as_deref()).is_none() && non_empty(c.secondary.as_deref()).is_none());
        let no_logo = self
            .logo
            .as_ref()
            .is_none_or(|l| non_empty(l.url.as_deref()).is_none());
        no_colors && no_logo
    }
}

impl AccountRecord {
    /// Branding in canonical form, migrating legacy fields on the fly.
    ///
    /// Canonical values win field by field; legacy values only fill what
    /// `branding_config` leaves empty.
    pub fn canonical_branding(&self) -> Option<BrandingConfig> {
        let legacy = self.legacy_branding();
        let config = match (&self.branding_config, legacy) {
            (Some(config), Some(legacy)) => config.filled_from(&legacy),
            (Some(config), None) => config.clone(),
            (None, Some(legacy)) => {
                tracing::debug!(account = %self.id, "adapting legacy palette branding");
                legacy
            }
            (None, None) => return None,
        };
        (!config.is_empty()).then_some(config)
    }

    fn legacy_branding(&self) -> Option<BrandingConfig> {
        let legacy = BrandingConfig::from_legacy(self.palette.as_ref(), self.logo_url.as_deref());
        (!legacy.is_empty()).then_some(legacy)
    }
}

impl BrandingConfig {
    /// This config with empty fields taken from `fallback`.
    pub fn filled_from(&self, fallback: &BrandingConfig) -> BrandingConfig {
        let own = self.colors.clone().unwrap_or_default();
        let other = fallback.colors.clone().unwrap_or_default();
        let pick = |mine: Option<String>, theirs: Option<String>| {
            non_empty(mine.as_deref()).or_else(|| non_empty(theirs.as_deref()))
        };
        let colors = BrandColors {
            primary: pick(own.primary, other.primary),
            secondary: pick(own.secondary, other.secondary),
        };
        let colors = (colors.primary.is_some() || colors.secondary.is_some()).then_some(colors);

        let has_logo = |config: &BrandingConfig| {
            config
                .logo
                .as_ref()
                .is_some_and(|l| non_empty(l.url.as_deref()).is_some())
        };
        let logo = if has_logo(self) {
            self.logo.clone()
        } else if has_logo(fallback) {
            fallback.logo.clone().map(|logo| BrandLogo {
                alt: self
                    .logo
                    .as_ref()
                    .and_then(|l| non_empty(l.alt.as_deref()))
                    .or(logo.alt),
                ..logo
            })
        } else {
            self.logo.clone()
        };

        BrandingConfig {
            version: BRANDING_VERSION,
            colors,
            logo,
        }
    }
}

/// Result of [`migrate_account`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// Record already used `branding_config`; legacy leftovers were dropped
    AlreadyCanonical,
    /// Legacy fields were converted into `branding_config`
    Migrated,
    /// Account has no branding in either shape
    NoBranding,
}

impl MigrationOutcome {
    /// Lowercase label for reports and logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            MigrationOutcome::AlreadyCanonical => "already-canonical",
            MigrationOutcome::Migrated => "migrated",
            MigrationOutcome::NoBranding => "no-branding",
        }
    }
}

/// Rewrite an account record to the canonical branding shape.
///
/// Legacy values that `branding_config` doesn't already cover are carried
/// over before the legacy fields are cleared, so running this twice is a no-op.
pub fn migrate_account(account: &mut AccountRecord) -> MigrationOutcome {
    let legacy = account.legacy_branding();

    let outcome = match (account.branding_config.take(), legacy) {
        (Some(config), Some(legacy)) => {
            let merged = config.filled_from(&legacy);
            let outcome = if merged == config {
                tracing::warn!(
                    account = %account.id,
                    "account has both branding shapes; keeping branding_config"
                );
                MigrationOutcome::AlreadyCanonical
            } else {
                tracing::debug!(account = %account.id, "legacy branding merged into branding_config");
                MigrationOutcome::Migrated
            };
            account.branding_config = Some(merged);
            outcome
        }
        (Some(config), None) => {
            let outcome = if config.is_empty() {
                MigrationOutcome::NoBranding
            } else {
                MigrationOutcome::AlreadyCanonical
            };
            account.branding_config = Some(config);
            outcome
        }
        (None, Some(legacy)) => {
            account.branding_config = Some(legacy);
            MigrationOutcome::Migrated
        }
        (None, None) => MigrationOutcome::NoBranding,
    };

    account.palette = None;
    account.logo_url = None;
    outcome
}

/// Logo applied to header sections.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogoOverride {
    /// Image location
    pub src: String,
    /// Alt text
    pub alt: String,
}

/// Resolved account branding, as applied to sections.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Branding {
    /// Fills `backgroundColor` when a section has none
    pub background_color: Option<String>,
    /// Fills `textColor` when a section has none
    pub text_color: Option<String>,
    /// Forced onto header sections
    pub logo: Option<LogoOverride>,
}

impl Branding {
    /// Resolve the branding of an account, whichever shape it is stored in.
    pub fn for_account(account: &AccountRecord) -> Self {
        account
            .canonical_branding()
            .map(|config| Self::from_config(&config, &account.name))
            .unwrap_or_default()
    }

    /// Resolve a canonical config; `account_name` backs a missing logo alt.
    pub fn from_config(config: &BrandingConfig, account_name: &str) -> Self {
        let colors = config.colors.as_ref();
        let logo = config.logo.as_ref().and_then(|logo| {
            non_empty(logo.url.as_deref()).map(|src| LogoOverride {
                src,
                alt: non_empty(logo.alt.as_deref()).unwrap_or_else(|| account_name.to_string()),
            })
        });

        Self {
            background_color: colors.and_then(|c| non_empty(c.primary.as_deref())),
            text_color: colors.and_then(|c| non_empty(c.secondary.as_deref())),
            logo,
        }
    }

    /// True when nothing would be applied.
    pub fn is_empty(&self) -> bool {
        self.background_color.is_none() && self.text_color.is_none() && self.logo.is_none()
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
