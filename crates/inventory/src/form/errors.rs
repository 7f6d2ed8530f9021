use crate::form::FormField;
use std::collections::BTreeMap;
use validator::ValidationError;

/// At most one error per field, shown next to that field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    errors: BTreeMap<FormField, ValidationError>,
}

impl FormErrors {
    pub fn insert(&mut self, field: FormField, error: ValidationError) {
        self.errors.entry(field).or_insert(error);
    }

    pub fn remove(&mut self, field: FormField) {
        self.errors.remove(&field);
    }

    pub fn get(&self, field: FormField) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn code(&self, field: FormField) -> Option<&str> {
        self.get(field).map(|error| error.code.as_ref())
    }

    pub fn message(&self, field: FormField) -> Option<String> {
        self.get(field)
            .and_then(|error| error.message.as_ref())
            .map(|message| message.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> Vec<String> {
        self.errors.keys().map(|field| field.key().to_string()).collect()
    }
}
