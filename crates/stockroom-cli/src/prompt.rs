//! Interactive prompt helpers.
//!
//! Passwords check the environment first so scripted invocations and tests
//! never block on a terminal. Input validators re-prompt locally on bad
//! input instead of surfacing an error.

use dialoguer::{Input, Password, Select};

use stockroom_core::store::validation::{validate_email, validate_name};

use crate::config;

/// Read a password, env-first.
pub fn password(prompt: &str) -> anyhow::Result<String> {
    if let Some(value) = config::password_from_env() {
        return Ok(value);
    }
    Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}

/// Read and confirm a password for a new account, env-first.
pub fn new_password() -> anyhow::Result<String> {
    if let Some(value) = config::new_password_from_env() {
        return Ok(value);
    }
    Password::new()
        .with_prompt("Password (8 characters minimum)")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}

/// Read a non-empty line of input.
pub fn required_input(prompt: &str) -> anyhow::Result<String> {
    Input::new()
        .with_prompt(prompt)
        .validate_with(|value: &String| -> Result<(), String> {
            if value.trim().is_empty() {
                Err("This field cannot be empty".to_string())
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map(|value: String| value.trim().to_string())
        .map_err(|e| anyhow::anyhow!("Failed to read input: {}", e))
}

/// Read a category or product name, re-prompting until valid.
pub fn name_input(prompt: &str, label: &'static str) -> anyhow::Result<String> {
    Input::new()
        .with_prompt(prompt)
        .validate_with(|value: &String| -> Result<(), String> {
            validate_name(label, value).map_err(|e| e.to_string())
        })
        .interact_text()
        .map(|value: String| value.trim().to_string())
        .map_err(|e| anyhow::anyhow!("Failed to read input: {}", e))
}

/// Read an email address, lowercased, re-prompting until well-formed.
pub fn email_input(prompt: &str) -> anyhow::Result<String> {
    Input::new()
        .with_prompt(prompt)
        .validate_with(|value: &String| -> Result<(), String> {
            validate_email(value.trim()).map_err(|e| e.to_string())
        })
        .interact_text()
        .map(|value: String| value.trim().to_ascii_lowercase())
        .map_err(|e| anyhow::anyhow!("Failed to read input: {}", e))
}

/// Read a positive integer id.
pub fn id_input(prompt: &str) -> anyhow::Result<i64> {
    Input::new()
        .with_prompt(prompt)
        .validate_with(|value: &String| -> Result<(), String> {
            match value.trim().parse::<i64>() {
                Ok(id) if id > 0 => Ok(()),
                _ => Err("Enter a positive number".to_string()),
            }
        })
        .interact_text()
        .map(|value: String| value.trim().parse().unwrap_or(0))
        .map_err(|e| anyhow::anyhow!("Failed to read input: {}", e))
}

/// Read a positive quantity.
pub fn quantity_input(prompt: &str) -> anyhow::Result<std::num::NonZeroU32> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|value: &String| -> Result<(), String> {
            match value.trim().parse::<u32>() {
                Ok(qty) if qty > 0 => Ok(()),
                _ => Err("Quantity must be a positive number".to_string()),
            }
        })
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read input: {}", e))?;
    value
        .trim()
        .parse::<std::num::NonZeroU32>()
        .map_err(|e| anyhow::anyhow!("Invalid quantity: {}", e))
}

/// Pick one item from a list, returning its index.
pub fn select(prompt: &str, items: &[&str]) -> anyhow::Result<usize> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read selection: {}", e))
}
