use feistel64::crypto::cipher::Feistel64Cipher;
use feistel64::crypto::cipher_traits::CipherAlgorithm;
use feistel64::crypto::utils::{adjust_key_length, bits_to_hex, bits_to_text, pad_text, text_to_bits};
use std::io::{self, BufRead, Write};

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let plain_text = prompt("Enter plaintext: ")?;
    let mut key = prompt("Enter key: ")?;

    if key.chars().count() != 8 {
        key = adjust_key_length(&key);
        log::debug!("key normalized to {:?}", key);
    }

    let plain_text = pad_text(&plain_text);
    let plain_text_bits = text_to_bits(&plain_text);
    let key_bits = text_to_bits(&key);

    let cipher = Feistel64Cipher::new(&key_bits)?;
    let cipher_bits = cipher.encrypt(&plain_text_bits)?;
    log::debug!("ciphertext is {} bits", cipher_bits.len());

    // Ciphertext bytes are arbitrary, so the text rendering may contain
    // unprintable characters; that is accepted as-is.
    println!("Cipher text:  {}", bits_to_text(&cipher_bits)?);
    println!("Cipher hex:  {}", bits_to_hex(&cipher_bits)?);

    Ok(())
}
