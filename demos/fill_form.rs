use formfill::{
    Browser, ChoiceSelection, ExtractedValue, FieldOption, FieldType, FillValue, FillerEngine,
    OtherSlot,
};
use tracing_subscriber::EnvFilter;

const SETUP: &str = r#"
(() => {
    document.body.innerHTML = [
        '<input id="name">',
        '<div id="color" aria-expanded="false">',
        '  <div role="option"><span>Red</span></div>',
        '  <div role="option"><span>Green</span></div>',
        '  <div role="option"><span>Blue</span></div>',
        '</div>',
        '<span id="picked-color"></span>',
        '<div id="toppings">',
        '  <div class="box" role="checkbox" aria-checked="false" data-label="Bacon"><span>Bacon</span></div>',
        '  <div class="box" role="checkbox" aria-checked="false" data-label="Cheese"><span>Cheese</span></div>',
        '  <div class="box other" role="checkbox" aria-checked="false" data-label="Other"><span>Other</span></div>',
        '</div>',
        '<input id="other-text">',
    ].join('');
    const color = document.getElementById('color');
    color.addEventListener('click', () => color.setAttribute('aria-expanded', 'true'));
    for (const opt of color.querySelectorAll('div[role=option]')) {
        opt.addEventListener('click', () => {
            document.getElementById('picked-color').textContent = opt.textContent.trim();
        });
    }
    for (const box of document.querySelectorAll('#toppings .box')) {
        box.addEventListener('click', () => {
            const next = box.getAttribute('aria-checked') === 'true' ? 'false' : 'true';
            box.setAttribute('aria-checked', next);
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
    page.wait_for_selector("#name").await?;

    let engine = FillerEngine::new();

    // Plain text input.
    let name_field = ExtractedValue {
        dom: Some(page.handle("#name")),
        ..Default::default()
    };
    let filled = engine
        .fill(FieldType::Text, &name_field, &FillValue::from("Andrew"))
        .await?;
    println!("Name filled: {filled}");

    // Dropdown: the scanner would extract the option labels up front; the
    // live click still goes through the reopened popup.
    let color_field = ExtractedValue {
        dom: Some(page.handle("#color")),
        options: ["Red", "Green", "Blue"]
            .iter()
            .enumerate()
            .map(|(i, label)| {
                FieldOption::new(
                    *label,
                    page.element("#color div[role=option]").nth(i).into_handle(),
                )
            })
            .collect(),
        ..Default::default()
    };
    let filled = engine
        .fill(FieldType::Dropdown, &color_field, &FillValue::from("Green"))
        .await?;
    println!(
        "Color filled: {filled} (picked: {})",
        page.evaluate("document.getElementById('picked-color').textContent").await?
    );

    // Multi-correct with an "other" escape hatch.
    let toppings_field = ExtractedValue {
        options: vec![
            FieldOption::new("Bacon", page.handle("#toppings .box[data-label=Bacon]")),
            FieldOption::new("Cheese", page.handle("#toppings .box[data-label=Cheese]")),
        ],
        other: Some(OtherSlot {
            toggle: page.handle("#toppings .box.other"),
            input: page.handle("#other-text"),
        }),
        ..Default::default()
    };
    let value = FillValue::MultiChoice(vec![
        ChoiceSelection::Label("Bacon".to_string()),
        ChoiceSelection::Other("Extra crispy".to_string()),
    ]);
    let filled = engine
        .fill(FieldType::MultiCorrectWithOther, &toppings_field, &value)
        .await?;
    println!("Toppings filled: {filled}");
    println!(
        "  bacon checked: {}",
        page.evaluate(
            "document.querySelector('#toppings .box[data-label=Bacon]').getAttribute('aria-checked')"
        )
        .await?
    );
    println!(
        "  other text: {}",
        page.evaluate("document.getElementById('other-text').value").await?
    );

    Ok(())
}
