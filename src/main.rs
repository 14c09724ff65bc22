use std::fs;

use log::info;

use birthday_docs::{
    enrich_records, match_week, parse_batch, render_envelopes, render_greetings, source,
    AppConfig, PageGeometry, PdfCanvas, Result, WeekWindow,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()?;

    info!("Fetching rows from {}", config.source.describe());
    let rows = source::fetch_rows(&config).await?;
    if rows.is_empty() {
        info!("Source returned no rows, nothing to do");
        return Ok(());
    }

    let records = parse_batch(&rows);
    info!("Parsed {} records from {} rows", records.len(), rows.len() - 1);

    let window = WeekWindow::current(config.timezone);
    let matches = match_week(records, &window);
    if matches.is_empty() {
        info!(
            "No birthdays between {} and {}",
            window.start.format("%d.%m.%Y"),
            window.end.format("%d.%m.%Y")
        );
        return Ok(());
    }
    info!("{} birthday(s) this week", matches.len());

    let enriched = enrich_records(matches);

    fs::create_dir_all(&config.output_dir)?;
    let stamp = format!(
        "{}-{}",
        window.start.format("%Y%m%d"),
        window.end.format("%Y%m%d")
    );

    let envelope_path = config.output_dir.join(format!("c5-couverts-{stamp}.pdf"));
    let envelope_geometry = PageGeometry::c5_envelope();
    let mut envelope_canvas = PdfCanvas::new(envelope_geometry);
    render_envelopes(&mut envelope_canvas, &envelope_geometry, &enriched);
    envelope_canvas.save(&envelope_path)?;

    let greeting_path = config
        .output_dir
        .join(format!("geburtstagsgruesse-{stamp}.pdf"));
    let greeting_geometry = PageGeometry::a4_landscape();
    let mut greeting_canvas = PdfCanvas::new(greeting_geometry);
    render_greetings(&mut greeting_canvas, &greeting_geometry, &enriched);
    greeting_canvas.save(&greeting_path)?;

    info!("Envelope document: {}", envelope_path.display());
    info!("Greeting document: {}", greeting_path.display());
    Ok(())
}
