//! Validating a URL-encoded sign-up form

use formcheck_validator::prelude::*;

fn main() -> Result<(), EngineError> {
    let refs = ReferenceSets::new()
        .with_country_codes(["us", "gb", "de"])
        .with_common_passwords(["password123", "qwertyuiop"]);

    let validator = FormValidator::new([
        ("Username", chain![Required, AlphaNumeric, StrLen::new(2, 30)]),
        ("Password", chain![Required, StrLen::new(8, 500), NotCommonPassword::new(&refs)]),
        ("Age", chain![Required, IntRange::new(18, 100)]),
        ("Country", chain![Required, CountryCode::new(&refs)]),
        ("Colours", chain![InListMultiple::new(["red", "green", "blue"])]),
    ])?;

    let mut form = Form::from_urlencoded(
        b"Username=henry%21&Password=password123&Age=17&Country=gb&Colours=red&Colours=red",
    );
    let result = validator.validate(&mut form);

    if result.is_valid() {
        println!("✓ form is valid");
        return Ok(());
    }

    for field in result.failed_fields() {
        for message in result.messages(field) {
            println!("✗ {field}: {message}");
        }
    }
    println!("\nredacted Password: {:?}", form.get("Password"));

    Ok(())
}
