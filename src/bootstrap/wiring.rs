//! Dependency wiring.
//!
//! Turns the raw [`AppConfig`] facts into resolved [`Settings`] and builds
//! the adapters and use cases every command needs.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use lj_app::usecases::{
    BuildShareResult, CheckPaymentStatus, FormSession, LoadTimeline, SubmissionSequencer,
};
use lj_core::config::AppConfig;
use lj_core::{PlanConfig, PlanKind};
use lj_infra::{FsPhotoSource, HttpJourneyApi, PngQrCode};

/// Resolved runtime settings; empty config values replaced by defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub api_timeout: Duration,
    pub public_origin: String,
    pub plan: PlanConfig,
    pub output_dir: PathBuf,
}

impl Settings {
    /// `plan_override` comes from the command line and wins over the file.
    pub fn from_config(
        config: &AppConfig,
        plan_override: Option<PlanKind>,
    ) -> anyhow::Result<Self> {
        let defaults = AppConfig::with_defaults();
        let or_default = |value: &str, default: &str| {
            if value.trim().is_empty() {
                default.to_string()
            } else {
                value.trim().to_string()
            }
        };

        let plan_kind = match plan_override {
            Some(kind) => kind,
            None => or_default(&config.plan, &defaults.plan)
                .parse::<PlanKind>()
                .with_context(|| format!("Invalid [plan] kind in config: {:?}", config.plan))?,
        };

        let api_timeout_secs = if config.api_timeout_secs == 0 {
            defaults.api_timeout_secs
        } else {
            config.api_timeout_secs
        };

        let output_dir = if config.output_dir.as_os_str().is_empty() {
            defaults.output_dir
        } else {
            config.output_dir.clone()
        };

        Ok(Self {
            api_base_url: or_default(&config.api_base_url, &defaults.api_base_url),
            api_timeout: Duration::from_secs(api_timeout_secs),
            public_origin: or_default(&config.public_origin, &defaults.public_origin),
            plan: PlanConfig::for_kind(plan_kind),
            output_dir,
        })
    }
}

/// Adapters and use cases shared by the commands.
pub struct AppDeps {
    pub settings: Settings,
    pub journey_api: Arc<HttpJourneyApi>,
    pub qr_code: PngQrCode,
    pub photos: FsPhotoSource,
    pub share: Arc<BuildShareResult>,
}

impl AppDeps {
    pub fn build(settings: Settings) -> anyhow::Result<Self> {
        let journey_api = Arc::new(
            HttpJourneyApi::new(settings.api_base_url.clone(), settings.api_timeout)
                .context("Failed to build the backend client")?,
        );
        let qr_code = PngQrCode::default();
        let share = Arc::new(BuildShareResult::new(
            Arc::new(qr_code),
            settings.public_origin.clone(),
        ));

        Ok(Self {
            settings,
            journey_api,
            qr_code,
            photos: FsPhotoSource::new(),
            share,
        })
    }

    pub fn form_session(&self) -> FormSession {
        let sequencer = SubmissionSequencer::new(
            self.journey_api.clone(),
            self.share.clone(),
            self.settings.plan,
        );
        FormSession::new(Arc::new(sequencer))
    }

    pub fn load_timeline(&self) -> LoadTimeline {
        LoadTimeline::new(self.journey_api.clone())
    }

    pub fn check_payment_status(&self) -> CheckPaymentStatus {
        CheckPaymentStatus::new(self.journey_api.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_falls_back_to_defaults() {
        let settings = Settings::from_config(&AppConfig::empty(), None).unwrap();

        assert_eq!(settings.api_base_url, "http://localhost:3333");
        assert_eq!(settings.api_timeout, Duration::from_secs(30));
        assert_eq!(settings.public_origin, "http://localhost:3000");
        assert_eq!(settings.plan, PlanConfig::free());
        assert_eq!(settings.output_dir, PathBuf::from("."));
    }

    #[test]
    fn plan_override_wins_over_file() {
        let mut config = AppConfig::with_defaults();
        config.plan = "legacy".to_string();

        let settings = Settings::from_config(&config, Some(PlanKind::Premium)).unwrap();
        assert_eq!(settings.plan, PlanConfig::premium());

        let settings = Settings::from_config(&config, None).unwrap();
        assert_eq!(settings.plan, PlanConfig::legacy());
    }

    #[test]
    fn unknown_plan_in_file_is_an_error() {
        let mut config = AppConfig::with_defaults();
        config.plan = "gold".to_string();

        let err = Settings::from_config(&config, None).unwrap_err();
        assert!(err.to_string().contains("Invalid [plan] kind"));
    }
}
