use formfill::{Browser, ExtractedValue, FieldType, FillValue, FillerEngine};
use tracing_subscriber::EnvFilter;

const SETUP: &str = r#"
(() => {
    document.body.innerHTML = [
        '<input id="day"> <input id="month"> <input id="year">',
        '<input id="hour"> <input id="minute">',
        '<div id="ampm" aria-expanded="false">',
        '  <div role="option"><span>AM</span></div>',
        '  <div role="option"><span>PM</span></div>',
        '</div>',
        '<span id="picked"></span>',
    ].join('');
    const ampm = document.getElementById('ampm');
    ampm.addEventListener('click', () => ampm.setAttribute('aria-expanded', 'true'));
    for (const opt of ampm.querySelectorAll('div[role=option]')) {
        opt.addEventListener('click', () => {
            document.getElementById('picked').textContent = opt.textContent.trim();
        });
    }
    return true;
})()
"#;

#[tokio::main]
async fn main() -> formfill::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("formfill=debug")),
        )
        .init();

    let browser = Browser::builder().headless(true).build().await?;
    let page = browser.new_page("about:blank").await?;
    page.evaluate(SETUP).await?;
    page.wait_for_selector("#day").await?;

    let engine = FillerEngine::new();

    let date_field = ExtractedValue {
        date: Some(page.handle("#day")),
        month: Some(page.handle("#month")),
        year: Some(page.handle("#year")),
        ..Default::default()
    };
    let filled = engine
        .fill(FieldType::Date, &date_field, &FillValue::from("11-11-2111"))
        .await?;
    println!("Date filled: {filled}");
    println!(
        "  day={} month={} year={}",
        page.evaluate("document.getElementById('day').value").await?,
        page.evaluate("document.getElementById('month').value").await?,
        page.evaluate("document.getElementById('year').value").await?,
    );

    let time_field = ExtractedValue {
        hour: Some(page.handle("#hour")),
        minute: Some(page.handle("#minute")),
        meridiem: Some(page.handle("#ampm")),
        ..Default::default()
    };
    let filled = engine
        .fill(
            FieldType::TimeWithMeridiem,
            &time_field,
            &FillValue::from("11-39-PM"),
        )
        .await?;
    println!("Time filled: {filled}");
    println!(
        "  hour={} minute={} picked={}",
        page.evaluate("document.getElementById('hour').value").await?,
        page.evaluate("document.getElementById('minute').value").await?,
        page.evaluate("document.getElementById('picked').textContent").await?,
    );

    // A literal that names no real calendar day is rejected up front.
    let filled = engine
        .fill(FieldType::Date, &date_field, &FillValue::from("31-04-2024"))
        .await?;
    println!("Impossible date filled: {filled}");

    Ok(())
}
