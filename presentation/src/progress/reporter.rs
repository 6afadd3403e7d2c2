//! Progress reporting for query routing

use assistant_application::{RouteProgressNotifier, StageStatus};
use assistant_domain::{AnswerSource, RouteStage};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner that shows which source is being asked
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn stage_display_name(stage: RouteStage) -> &'static str {
        match stage {
            RouteStage::TryingCatalog => "Katalog",
            RouteStage::TryingAcademic => "Akademik arşiv",
            RouteStage::TryingSite => "Web sitesi",
            RouteStage::FallingBack => "Yapay zekâ",
            RouteStage::Done => "Tamam",
        }
    }

    fn status_text(status: StageStatus) -> String {
        match status {
            StageStatus::Found(n) => format!("{} {} sonuç", "v".green(), n),
            StageStatus::Empty => format!("{} sonuç yok", "-".yellow()),
            StageStatus::NotApplicable => format!("{} ilgisiz", "-".dimmed()),
            StageStatus::Fault => format!("{} hata", "x".red()),
        }
    }

    fn with_spinner(&self, f: impl FnOnce(&mut Option<ProgressBar>)) {
        if let Ok(mut guard) = self.spinner.lock() {
            f(&mut guard);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, stage: RouteStage) {
        self.with_spinner(|slot| {
            let pb = slot.get_or_insert_with(|| {
                let pb = ProgressBar::new_spinner();
                pb.set_style(Self::spinner_style());
                pb.enable_steady_tick(Duration::from_millis(100));
                pb
            });
            pb.set_prefix(Self::stage_display_name(stage));
            pb.set_message("aranıyor...");
        });
    }

    fn on_stage_complete(&self, stage: RouteStage, status: StageStatus) {
        self.with_spinner(|slot| {
            if let Some(pb) = slot.as_ref() {
                pb.println(format!(
                    "  {} {}",
                    Self::stage_display_name(stage).bold(),
                    Self::status_text(status)
                ));
            }
        });
    }

    fn on_route_complete(&self, _source: AnswerSource) {
        self.with_spinner(|slot| {
            if let Some(pb) = slot.take() {
                pb.finish_and_clear();
            }
        });
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl RouteProgressNotifier for SimpleProgress {
    fn on_stage_start(&self, stage: RouteStage) {
        eprintln!("{} {}", "->".cyan(), ProgressReporter::stage_display_name(stage).bold());
    }

    fn on_stage_complete(&self, _stage: RouteStage, status: StageStatus) {
        eprintln!("  {}", ProgressReporter::status_text(status));
    }
}
