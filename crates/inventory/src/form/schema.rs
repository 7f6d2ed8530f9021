use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    ImportDate,
    SalePrice,
    Quantity,
    ProductType,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::ImportDate,
        FormField::SalePrice,
        FormField::Quantity,
        FormField::ProductType,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::ImportDate => "import_date",
            FormField::SalePrice => "sale_price",
            FormField::Quantity => "quantity",
            FormField::ProductType => "product_type_id",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldAccess {
    Editable,
    ReadOnly,
}

/// Which fields a flow lets the user edit. Read-only fields skip validation
/// and keep the value of the fetched record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    access: BTreeMap<FormField, FieldAccess>,
}

impl FormSchema {
    pub fn create() -> Self {
        Self {
            access: FormField::ALL
                .into_iter()
                .map(|field| (field, FieldAccess::Editable))
                .collect(),
        }
    }

    pub fn update() -> Self {
        let mut schema = Self::create();
        schema
            .access
            .insert(FormField::SalePrice, FieldAccess::ReadOnly);
        schema
    }

    pub fn access(&self, field: FormField) -> FieldAccess {
        self.access
            .get(&field)
            .copied()
            .unwrap_or(FieldAccess::ReadOnly)
    }

    pub fn is_editable(&self, field: FormField) -> bool {
        self.access(field) == FieldAccess::Editable
    }

    pub fn editable_fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.access
            .iter()
            .filter(|(_, access)| **access == FieldAccess::Editable)
            .map(|(field, _)| *field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_locks_only_the_price() {
        let update = FormSchema::update();
        let editable: Vec<FormField> = update.editable_fields().collect();
        assert_eq!(
            editable,
            vec![
                FormField::Name,
                FormField::ImportDate,
                FormField::Quantity,
                FormField::ProductType,
            ]
        );
        assert_eq!(update.access(FormField::SalePrice), FieldAccess::ReadOnly);
        assert_eq!(FormSchema::create().editable_fields().count(), 5);
    }
}
