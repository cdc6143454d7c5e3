use std::env;

use crate::error::ComplexError;

/// Environment variable which selects the language of the console messages.
pub const LANGUAGE_VAR: &str = "COMPLEXCALC_LANG";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Language {
    English,
    Russian,
}

impl Language {
    /// Picks the language from `COMPLEXCALC_LANG`, falling back to `LANG`.
    pub fn from_env() -> Language {
        env::var(LANGUAGE_VAR)
            .or_else(|_| env::var("LANG"))
            .map(|tag| Language::from_tag(&tag))
            .unwrap_or(Language::English)
    }

    /// Maps a locale tag such as `ru_RU.UTF-8` to a language. Anything unknown is English.
    pub fn from_tag(tag: &str) -> Language {
        if tag.trim().to_lowercase().starts_with("ru") {
            Language::Russian
        } else {
            Language::English
        }
    }
}

/// The text the console prints. Each field is written as a line of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Messages {
    pub first_prompt: &'static str,
    pub second_prompt: &'static str,
    pub first_label: &'static str,
    pub second_label: &'static str,
    pub retry: &'static str,
    pub error: &'static str,
    pub try_again: &'static str,
    pub division_by_zero: &'static str,
}

impl Messages {
    pub fn new(language: Language) -> Messages {
        match language {
            Language::English => Messages::english(),
            Language::Russian => Messages::russian(),
        }
    }

    pub fn english() -> Messages {
        Messages {
            first_prompt: "Enter the first complex number in the form 'a+bi' (e.g. 3+4i):",
            second_prompt: "Enter the second complex number in the form 'a+bi' (e.g. 1-2i):",
            first_label: "First number a =",
            second_label: "Second number b =",
            retry: "Invalid input. Please try again.",
            error: "Error",
            try_again: "Please try again.",
            division_by_zero: "Attempted to divide by zero.",
        }
    }

    pub fn russian() -> Messages {
        Messages {
            first_prompt: "Введите первое комплексное число в формате 'a+bi' (например, 3+4i):",
            second_prompt: "Введите второе комплексное число в формате 'a+bi' (например, 1-2i):",
            first_label: "Первое число a =",
            second_label: "Второе число b =",
            retry: "Неверно введены значения. Попробуйте снова.",
            error: "Ошибка",
            try_again: "Повторите ввод.",
            division_by_zero: "Попытка деления на ноль.",
        }
    }

    /// Line printed when reading input failed for a reason other than bad formatting.
    pub fn unexpected_error(&self, detail: &str) -> String {
        format!("{}: {}. {}", self.error, detail, self.try_again)
    }

    /// Text for an error reported to the user, in this language where there is a translation.
    pub fn describe(&self, err: &ComplexError) -> String {
        match *err {
            ComplexError::DivisionByZero => self.division_by_zero.to_string(),
            _ => err.to_string(),
        }
    }
}

impl Default for Messages {
    fn default() -> Messages {
        Messages::english()
    }
}

//--------------------------------------------------------------------------------------------------
