use cipher_drills::errors::CipherDrillsError;
use cipher_drills::vigenere::CipheringMachine;

use serde_json::json;
use std::sync::Once;

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    });
}

#[test]
fn showcase_cipher_decipher_mixed_text() -> Result<(), CipherDrillsError> {
    init_logging();

    let machine = CipheringMachine::direct();

    let original = "Meet me at 10:30, by the old bridge. Вітання!".to_string();

    let cipher = machine.encrypt(&original, "Lemon")?;

    dbg!(&cipher);

    // Only ASCII letters change; digits, punctuation and Cyrillic stay put.
    for (plain, coded) in original.chars().zip(cipher.chars()) {
        if !plain.is_ascii_alphabetic() {
            assert_eq!(plain, coded);
        } else {
            assert!(coded.is_ascii_uppercase());
        }
    }

    let decoded = machine.decrypt(&cipher, "Lemon")?;

    dbg!(&original, &decoded);
    assert_eq!(
        decoded,
        "MEET ME AT 10:30, BY THE OLD BRIDGE. Вітання!"
    );

    Ok(())
}

#[test]
fn showcase_reverse_machine_from_settings() -> Result<(), CipherDrillsError> {
    init_logging();

    let machine = CipheringMachine::from_json(r#"{"orientation_is_clear": false}"#)?;

    let cipher = machine.encrypt_value(&json!("attack at dawn!"), &json!("alphonse"))?;
    assert_eq!(cipher, "!ULLD XS XQHIEA");

    let rejected = machine.encrypt_value(&json!(12345), &json!("alphonse"));
    assert!(matches!(rejected, Err(CipherDrillsError::InvalidArgument(_))));

    Ok(())
}
