use std::fs;

use super::error::InputError;

//─────────────────────────────────────────────────────────────────────────────

/// Parses a comma- and/or whitespace-separated list of integers.
///
/// Values are read as 32-bit integers, the width the search accepts.
pub fn parse_numbers(text: &str, max_numbers: usize) -> Result<Vec<i32>, InputError> {
    let numbers = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i32>()
                .map_err(|_| InputError::InvalidNumber(token.to_string()))
        })
        .collect::<Result<Vec<i32>, InputError>>()?;

    if numbers.is_empty() {
        return Err(InputError::EmptyNumbers);
    }
    if numbers.len() > max_numbers {
        return Err(InputError::TooManyNumbers {
            count: numbers.len(),
            max: max_numbers,
        });
    }
    Ok(numbers)
}

/// Parses the target: an optional leading `-` followed by digits.
pub fn parse_target(text: &str) -> Result<i32, InputError> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::InvalidTarget(text.to_string()));
    }
    trimmed
        .parse::<i32>()
        .map_err(|_| InputError::InvalidTarget(text.to_string()))
}

/// Loads a number list from a text file.
pub fn load_numbers_from_file(file_path: &str, max_numbers: usize) -> Result<Vec<i32>, InputError> {
    let file_content =
        fs::read_to_string(file_path).map_err(|e| InputError::ReadFile(file_path.into(), e))?;
    parse_numbers(&file_content, max_numbers)
}
