use log::info;
use loon_rules::{export_rules, LoonError, Settings};
use std::process;

fn main() -> Result<(), LoonError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load()?;

    match export_rules(&settings) {
        Ok(summary) => {
            if !summary.categories.is_empty() {
                let breakdown: Vec<String> = summary
                    .categories
                    .iter()
                    .map(|(category, count)| format!("{}={}", category.label(), count))
                    .collect();
                info!("Categories: {}", breakdown.join(", "));
            }

            println!(
                "Extracted {} Loon entries to {}",
                summary.count,
                summary.file_name()
            );
            Ok(())
        }
        Err(LoonError::FetchError { url, source }) => {
            println!("Error fetching README from {}: {}", url, source);
            process::exit(1);
        }
        Err(err) => Err(err),
    }
}
