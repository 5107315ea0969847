use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    bar.set_style(
        ProgressStyle::with_template(" {msg} {wide_bar} estimated remaining: {eta_precise}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}

pub fn get_progressspinner(job_name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(job_name.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
