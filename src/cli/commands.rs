//! Command handlers.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context};
use tracing::{info, info_span, warn, Instrument};

use lj_core::journey::{ShareLink, SubmissionResult, QR_CODE_FILE_NAME};
use lj_core::payment::{PaymentPage, PaymentRoute};
use lj_core::ports::PhotoSourcePort;
use lj_core::timeline::{format_long_date, Timeline};
use lj_core::wizard::{Field, FieldValue, WizardController};
use lj_core::{JourneyId, PlanKind};
use lj_infra::PngQrCode;

use crate::bootstrap::{resolve_config, AppDeps, Settings};
use crate::cli::manifest::JourneyManifest;
use crate::cli::{Cli, Commands};

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(cli.config.as_deref())?;
    let plan_override = match &cli.command {
        Commands::Create { plan, .. } => plan.map(PlanKind::from),
        _ => None,
    };
    let settings = Settings::from_config(&config, plan_override)?;
    let deps = AppDeps::build(settings)?;

    match cli.command {
        Commands::Create { manifest, .. } => {
            let manifest = JourneyManifest::load(&manifest)?;
            let result = create(&deps, &manifest).await?;
            print_share_result(&deps, &result)?;
        }
        Commands::Show { journey_id, json } => {
            let timeline = deps
                .load_timeline()
                .execute(&JourneyId::from(journey_id))
                .await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&timeline)?);
            } else {
                print!("{}", render_timeline(&timeline));
            }
        }
        Commands::Payment { journey_id, page } => {
            let page = PaymentPage::from(page);
            let route = deps
                .check_payment_status()
                .execute(page, Some(journey_id.as_str()))
                .await;
            report_payment_route(&deps, route)?;
        }
        Commands::Qr { journey_id } => {
            let result = deps.share.execute(&JourneyId::from(journey_id));
            print_share_result(&deps, &result)?;
        }
    }

    Ok(())
}

/// Fills the wizard from a manifest and submits it.
pub async fn create(
    deps: &AppDeps,
    manifest: &JourneyManifest,
) -> anyhow::Result<SubmissionResult> {
    let span = info_span!("command.create", plan = %deps.settings.plan.kind);
    async {
        let mut session = deps.form_session();
        fill_wizard(session.wizard_mut(), manifest, &deps.photos).await?;
        let result = session.finish().await?;
        info!(journey_id = %result.journey_id, "journey published");
        Ok(result)
    }
    .instrument(span)
    .await
}

/// Drives the wizard through every step with the manifest's answers.
pub async fn fill_wizard(
    wizard: &mut WizardController,
    manifest: &JourneyManifest,
    photos: &dyn PhotoSourcePort,
) -> anyhow::Result<()> {
    wizard.update_field(Field::Partner1, manifest.partner1.as_str().into())?;
    wizard.update_field(Field::Partner2, manifest.partner2.as_str().into())?;
    advance_or_report(wizard)?;

    wizard.update_field(Field::JourneyTitle, manifest.title.as_str().into())?;
    advance_or_report(wizard)?;

    // Instructions.
    advance_or_report(wizard)?;

    for (index, memory) in manifest.memories.iter().enumerate() {
        wizard
            .open_for_create()
            .with_context(|| format!("Cannot add memory {}", index + 1))?;

        let photo = match &memory.photo {
            Some(path) => Some(
                photos
                    .load(path)
                    .await
                    .with_context(|| format!("Memory {}: cannot load photo", index + 1))?,
            ),
            None => None,
        };

        wizard.update_field(Field::MemoryDate, FieldValue::Date(memory.date))?;
        wizard.update_field(Field::MemoryTitle, memory.title.as_str().into())?;
        wizard.update_field(Field::MemoryDescription, memory.description.as_str().into())?;
        wizard.update_field(Field::MemoryPhoto, FieldValue::Photo(photo))?;

        if let Err(err) = wizard.commit() {
            bail!("Memory {}: {}{}", index + 1, err, describe_errors(wizard));
        }
    }

    Ok(())
}

fn advance_or_report(wizard: &mut WizardController) -> anyhow::Result<()> {
    let step = wizard.current_step();
    if wizard.advance() {
        return Ok(());
    }
    Err(anyhow!(
        "Step {} is incomplete{}",
        step.index() + 1,
        describe_errors(wizard)
    ))
}

fn describe_errors(wizard: &WizardController) -> String {
    wizard
        .visible_errors()
        .iter()
        .map(|(field, error)| format!("\n  {}: {}", field.name(), error))
        .collect()
}

fn print_share_result(deps: &AppDeps, result: &SubmissionResult) -> anyhow::Result<()> {
    println!("{}", result.shareable_link);
    println!("{}", result.route().path());

    match result.qr_error_message() {
        Some(message) => eprintln!("{message}"),
        None => {
            let path = write_qr_png(
                &deps.qr_code,
                &result.shareable_link,
                &deps.settings.output_dir,
            )?;
            println!("{}", path.display());
        }
    }
    Ok(())
}

/// Writes `love_journey_qr_code.png` for `link` into `output_dir`.
pub fn write_qr_png(
    qr: &PngQrCode,
    link: &ShareLink,
    output_dir: &Path,
) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output dir: {}", output_dir.display()))?;
    let png = qr.render_png(link.as_str())?;
    let path = output_dir.join(QR_CODE_FILE_NAME);
    std::fs::write(&path, png)
        .with_context(|| format!("Failed to write QR code: {}", path.display()))?;
    Ok(path)
}

fn report_payment_route(deps: &AppDeps, route: PaymentRoute) -> anyhow::Result<()> {
    match route {
        PaymentRoute::Proceed(route) => {
            println!("Pagamento aprovado.");
            println!("{}{}", deps.settings.public_origin.trim_end_matches('/'), route.path());
            Ok(())
        }
        PaymentRoute::StayPending => {
            println!("Pagamento Pendente");
            println!("Seu pagamento está sendo processado. Isso pode levar alguns minutos.");
            Ok(())
        }
        PaymentRoute::Blocked(err) => {
            warn!(error = %err, "payment check blocked");
            Err(err.into())
        }
    }
}

/// Plain-text timeline, memories in date order.
pub fn render_timeline(timeline: &Timeline) -> String {
    let mut out = format!("{}\n{}\n", timeline.title, timeline.couple_line());
    for memory in &timeline.memories {
        out.push_str(&format!(
            "\n{}\n  {}\n  {}\n",
            format_long_date(&memory.date),
            memory.title,
            memory.description
        ));
        if !memory.photo_mime_type.is_empty() && memory.photo.is_some() {
            out.push_str(&format!("  [foto: {}]\n", memory.photo_mime_type));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lj_core::timeline::TimelineMemory;
    use lj_core::wizard::WizardStep;
    use lj_core::PlanConfig;
    use lj_infra::FsPhotoSource;

    use crate::cli::manifest::MemoryManifest;

    fn manifest(dir: &Path, memories: usize) -> JourneyManifest {
        let photo = dir.join("foto.jpg");
        std::fs::write(&photo, b"\xff\xd8\xff").unwrap();
        JourneyManifest {
            partner1: "Alice".to_string(),
            partner2: "Bruno".to_string(),
            title: "Nossa História".to_string(),
            memories: (0..memories)
                .map(|i| MemoryManifest {
                    date: chrono::NaiveDate::from_ymd_opt(2021, 2, 1 + i as u32),
                    title: format!("memória {i}"),
                    description: "um dia especial".to_string(),
                    photo: Some(photo.clone()),
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn fill_wizard_reaches_submittable_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut wizard = WizardController::new(PlanConfig::free());

        fill_wizard(&mut wizard, &manifest(dir.path(), 3), &FsPhotoSource::new())
            .await
            .unwrap();

        assert_eq!(wizard.current_step(), WizardStep::Memories);
        assert_eq!(wizard.memories().len(), 3);
        assert!(wizard.can_submit());
    }

    #[tokio::test]
    async fn fill_wizard_reports_missing_partner() {
        let dir = tempfile::tempdir().unwrap();
        let mut input = manifest(dir.path(), 3);
        input.partner2.clear();
        let mut wizard = WizardController::new(PlanConfig::free());

        let err = fill_wizard(&mut wizard, &input, &FsPhotoSource::new())
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("Step 1 is incomplete"));
        assert!(message.contains("Campo obrigatório"));
        assert_eq!(wizard.current_step(), WizardStep::Names);
    }

    #[tokio::test]
    async fn fill_wizard_stops_at_capacity() {
        let dir = tempfile::tempdir().unwrap();
        let mut wizard = WizardController::new(PlanConfig::free());

        let err = fill_wizard(&mut wizard, &manifest(dir.path(), 4), &FsPhotoSource::new())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Cannot add memory 4"));
        assert_eq!(wizard.memories().len(), 3);
    }

    #[tokio::test]
    async fn fill_wizard_reports_incomplete_memory() {
        let dir = tempfile::tempdir().unwrap();
        let mut input = manifest(dir.path(), 3);
        input.memories[1].photo = None;
        let mut wizard = WizardController::new(PlanConfig::legacy());

        let err = fill_wizard(&mut wizard, &input, &FsPhotoSource::new())
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.starts_with("Memory 2: Todos os campos da lembrança são obrigatórios"));
        assert!(message.contains("photo"));
    }

    #[test]
    fn write_qr_png_uses_download_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("qr");
        let link = ShareLink::for_journey("https://lovejourney.app", &JourneyId::from("abc"));

        let path = write_qr_png(&PngQrCode::default(), &link, &out).unwrap();

        assert_eq!(path, out.join("love_journey_qr_code.png"));
        assert!(std::fs::read(&path).unwrap().starts_with(b"\x89PNG"));
    }

    #[test]
    fn render_timeline_uses_long_dates() {
        let timeline = Timeline {
            id: JourneyId::from("j"),
            title: "Nós".to_string(),
            partner1: "Alice".to_string(),
            partner2: "Bruno".to_string(),
            memories: vec![TimelineMemory {
                id: "m".to_string(),
                date: "2021-02-14".to_string(),
                title: "Primeiro encontro".to_string(),
                description: "Café".to_string(),
                photo: None,
                photo_mime_type: String::new(),
            }],
        };

        let text = render_timeline(&timeline);
        assert!(text.starts_with("Nós\nAlice e Bruno\n"));
        assert!(text.contains("14 de fevereiro de 2021"));
    }
}
