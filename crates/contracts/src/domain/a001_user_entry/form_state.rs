//! Состояние формы ввода пользователя и редьюсер событий.
//!
//! Каждое событие порождает новое состояние; если нужно выполнить запрос к
//! серверу, в [`Transition::request`] возвращается тело запроса.

use super::aggregate::{Gender, SkillCatalog, UserEntryDto};
use super::submission::{interpret_reply, HttpReply, SubmissionError, ValidationError};

pub const SAVED_SUCCESSFULLY: &str = "Saved successfully";

/// Скалярное поле формы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    RollNo,
    Gender,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Danger,
}

impl MessageKind {
    /// Суффикс CSS-класса `alert-*`
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Danger => "danger",
        }
    }
}

/// Сообщение-баннер над формой
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl FormMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn danger(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Danger,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    FieldChanged(Field, String),
    SkillToggled(String),
    SubmitRequested,
    /// Результат HTTP-вызова; `Err` содержит текст сетевой ошибки
    ResponseReceived(Result<HttpReply, String>),
}

/// Результат применения события
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: FormState,
    pub request: Option<UserEntryDto>,
}

impl Transition {
    fn stay(state: FormState) -> Self {
        Self {
            state,
            request: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub catalog: SkillCatalog,
    pub name: String,
    pub roll_no: String,
    pub gender: String,
    pub skills: Vec<String>,
    pub message: Option<FormMessage>,
    pub phase: SubmitPhase,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(SkillCatalog::standard())
    }
}

impl FormState {
    pub fn new(catalog: SkillCatalog) -> Self {
        Self {
            catalog,
            name: String::new(),
            roll_no: String::new(),
            gender: String::new(),
            skills: Vec::new(),
            message: None,
            phase: SubmitPhase::Idle,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::RollNo => &self.roll_no,
            Field::Gender => &self.gender,
        }
    }

    /// Проверяет обязательные поля и собирает тело запроса
    pub fn validate(&self) -> Result<UserEntryDto, ValidationError> {
        if self.name.trim().is_empty()
            || self.roll_no.trim().is_empty()
            || self.gender.trim().is_empty()
        {
            return Err(ValidationError::MissingRequired);
        }

        let gender: Gender = self
            .gender
            .parse()
            .map_err(|_| ValidationError::UnknownGender(self.gender.clone()))?;

        Ok(UserEntryDto {
            name: self.name.clone(),
            roll_no: self.roll_no.clone(),
            gender,
            skills: self.skills.clone(),
        })
    }

    pub fn reduce(&self, event: FormEvent) -> Transition {
        match event {
            FormEvent::FieldChanged(field, value) => {
                let mut next = self.clone();
                match field {
                    Field::Name => next.name = value,
                    Field::RollNo => next.roll_no = value,
                    Field::Gender => next.gender = value,
                }
                Transition::stay(next)
            }
            FormEvent::SkillToggled(skill) => {
                if !self.catalog.contains(&skill) {
                    return Transition::stay(self.clone());
                }
                let mut next = self.clone();
                if next.has_skill(&skill) {
                    next.skills.retain(|s| *s != skill);
                } else {
                    next.skills.push(skill);
                }
                Transition::stay(next)
            }
            FormEvent::SubmitRequested => self.begin_submit(),
            FormEvent::ResponseReceived(outcome) => self.complete_submit(outcome),
        }
    }

    fn begin_submit(&self) -> Transition {
        // Повторная отправка, пока предыдущий запрос не завершён
        if self.is_submitting() {
            return Transition::stay(self.clone());
        }

        let mut next = self.clone();
        next.message = None;

        match self.validate() {
            Ok(payload) => {
                next.phase = SubmitPhase::Submitting;
                Transition {
                    state: next,
                    request: Some(payload),
                }
            }
            Err(e) => {
                next.message = Some(FormMessage::danger(e.to_string()));
                Transition::stay(next)
            }
        }
    }

    fn complete_submit(&self, outcome: Result<HttpReply, String>) -> Transition {
        if !self.is_submitting() {
            return Transition::stay(self.clone());
        }

        let result = outcome
            .map_err(SubmissionError::Transport)
            .and_then(|reply| interpret_reply(&reply));

        let mut next = self.clone();
        next.phase = SubmitPhase::Idle;
        match result {
            Ok(()) => {
                next.name.clear();
                next.roll_no.clear();
                next.gender.clear();
                next.skills.clear();
                next.message = Some(FormMessage::success(SAVED_SUCCESSFULLY));
            }
            Err(e) => {
                next.message = Some(FormMessage::danger(e.to_string()));
            }
        }
        Transition::stay(next)
    }
}
