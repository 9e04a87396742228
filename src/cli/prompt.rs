//! Interactive field prompts
//!
//! Collects any transaction fields the user did not pass as flags. Each
//! prompt validates its own field and re-asks until the input is accepted,
//! so a typo costs one line, not the whole command.

use dialoguer::Input;

use crate::error::{TallyError, TallyResult};
use crate::models::Category;
use crate::services::{parse_positive_amount, resolve_date, TransactionInput};

/// Prompt for whichever transaction fields are still missing
pub fn prompt_transaction(
    date: Option<String>,
    amount: Option<String>,
    category: Option<String>,
    description: Option<String>,
) -> TallyResult<TransactionInput> {
    let date = match date {
        Some(d) => Some(d),
        None => Some(
            Input::<String>::new()
                .with_prompt("Date (DD-MM-YYYY, leave empty for today)")
                .allow_empty(true)
                .validate_with(|input: &String| validate(resolve_date(Some(input.as_str()))))
                .interact_text()
                .map_err(prompt_failed)?,
        ),
    };

    let amount = match amount {
        Some(a) => a,
        None => Input::<String>::new()
            .with_prompt("Amount")
            .validate_with(|input: &String| validate(parse_positive_amount(input)))
            .interact_text()
            .map_err(prompt_failed)?,
    };

    let category = match category {
        Some(c) => c,
        None => Input::<String>::new()
            .with_prompt("Category (Income/Expense)")
            .validate_with(|input: &String| validate(Category::parse(input)))
            .interact_text()
            .map_err(prompt_failed)?,
    };

    let description = match description {
        Some(d) => Some(d),
        None => Some(
            Input::<String>::new()
                .with_prompt("Description (optional)")
                .allow_empty(true)
                .interact_text()
                .map_err(prompt_failed)?,
        ),
    };

    Ok(TransactionInput {
        date,
        amount,
        category,
        description,
    })
}

fn validate<T>(result: TallyResult<T>) -> Result<(), String> {
    result.map(|_| ()).map_err(|e| e.to_string())
}

fn prompt_failed(err: dialoguer::Error) -> TallyError {
    TallyError::Io(format!("Prompt failed: {}", err))
}
