/// Ordered list-of-records editing for the profile dialog.
///
/// Records are addressed by position only; there are no persistent ids.
/// Fields are addressed through per-record-type enums, so an unknown field
/// name is unrepresentable. No validation happens at this layer.
use crate::types::{EducationRecord, ExperienceRecord};

/// A record shape editable field-by-field.
pub trait RecordForm: Clone + Default {
    type Field: Copy + PartialEq;

    fn empty() -> Self {
        Self::default()
    }

    fn set(&mut self, field: Self::Field, value: String);
    fn get(&self, field: Self::Field) -> &str;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExperienceField {
    Title,
    Company,
    StartDate,
    EndDate,
    Description,
}

impl ExperienceField {
    pub const ALL: [ExperienceField; 5] = [
        ExperienceField::Title,
        ExperienceField::Company,
        ExperienceField::StartDate,
        ExperienceField::EndDate,
        ExperienceField::Description,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceField::Title => "Title",
            ExperienceField::Company => "Company",
            ExperienceField::StartDate => "Start date",
            ExperienceField::EndDate => "End date",
            ExperienceField::Description => "Description",
        }
    }

    pub fn is_date(&self) -> bool {
        matches!(self, ExperienceField::StartDate | ExperienceField::EndDate)
    }
}

impl RecordForm for ExperienceRecord {
    type Field = ExperienceField;

    fn set(&mut self, field: ExperienceField, value: String) {
        match field {
            ExperienceField::Title => self.title = value,
            ExperienceField::Company => self.company = value,
            ExperienceField::StartDate => self.start_date = value,
            ExperienceField::EndDate => self.end_date = value,
            ExperienceField::Description => self.description = value,
        }
    }

    fn get(&self, field: ExperienceField) -> &str {
        match field {
            ExperienceField::Title => &self.title,
            ExperienceField::Company => &self.company,
            ExperienceField::StartDate => &self.start_date,
            ExperienceField::EndDate => &self.end_date,
            ExperienceField::Description => &self.description,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EducationField {
    Degree,
    Institution,
    StartDate,
    EndDate,
    Description,
}

impl EducationField {
    pub const ALL: [EducationField; 5] = [
        EducationField::Degree,
        EducationField::Institution,
        EducationField::StartDate,
        EducationField::EndDate,
        EducationField::Description,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EducationField::Degree => "Degree",
            EducationField::Institution => "Institution",
            EducationField::StartDate => "Start date",
            EducationField::EndDate => "End date",
            EducationField::Description => "Description",
        }
    }

    pub fn is_date(&self) -> bool {
        matches!(self, EducationField::StartDate | EducationField::EndDate)
    }
}

impl RecordForm for EducationRecord {
    type Field = EducationField;

    fn set(&mut self, field: EducationField, value: String) {
        match field {
            EducationField::Degree => self.degree = value,
            EducationField::Institution => self.institution = value,
            EducationField::StartDate => self.start_date = value,
            EducationField::EndDate => self.end_date = value,
            EducationField::Description => self.description = value,
        }
    }

    fn get(&self, field: EducationField) -> &str {
        match field {
            EducationField::Degree => &self.degree,
            EducationField::Institution => &self.institution,
            EducationField::StartDate => &self.start_date,
            EducationField::EndDate => &self.end_date,
            EducationField::Description => &self.description,
        }
    }
}

/// Ordered record list; display order is edit order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordList<T: RecordForm> {
    records: Vec<T>,
}

impl<T: RecordForm> RecordList<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn from_records(records: Vec<T>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Append a blank record; it is immediately editable at the last index.
    pub fn add(&mut self) {
        self.records.push(T::empty());
    }

    /// Replace one field of the record at `index`, leaving every other field
    /// and record untouched. `index` must be within bounds; callers derive it
    /// from the currently rendered list.
    pub fn set_field(&mut self, index: usize, field: T::Field, value: String) {
        self.records[index].set(field, value);
    }

    /// Remove the record at `index`; later records shift down by one, so any
    /// held index past `index` must be re-derived. `index` must be within
    /// bounds.
    pub fn remove(&mut self, index: usize) -> T {
        self.records.remove(index)
    }
}

/// Date portion of an ISO date-time string: everything before the `T`
/// separator, or the value unchanged when it has no time component.
pub fn date_only(value: &str) -> &str {
    match value.split_once('T') {
        Some((date, _)) => date,
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_blank_record() {
        let mut list: RecordList<ExperienceRecord> = RecordList::new();
        list.add();
        list.add();

        assert_eq!(list.len(), 2);
        let last = list.get(1).unwrap();
        for field in ExperienceField::ALL {
            assert_eq!(last.get(field), "");
        }
    }

    #[test]
    fn test_set_field_changes_only_that_field() {
        let mut list: RecordList<ExperienceRecord> = RecordList::new();
        list.add();
        list.add();
        list.set_field(0, ExperienceField::Company, "Acme".to_string());

        let before = list.clone();
        list.set_field(0, ExperienceField::Title, "Engineer".to_string());

        assert_eq!(list.get(0).unwrap().title, "Engineer");
        assert_eq!(list.get(0).unwrap().company, "Acme");
        // The other record is value-equal to its prior state.
        assert_eq!(list.get(1), before.get(1));
    }

    #[test]
    fn test_remove_shifts_later_records_left() {
        let mut list: RecordList<EducationRecord> = RecordList::new();
        for degree in ["BSc", "MSc", "PhD"] {
            list.add();
            list.set_field(list.len() - 1, EducationField::Degree, degree.to_string());
        }

        list.remove(1);

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().degree, "BSc");
        assert_eq!(list.get(1).unwrap().degree, "PhD");
    }

    #[test]
    fn test_remove_last_record() {
        let mut list: RecordList<ExperienceRecord> = RecordList::new();
        list.add();
        list.add();
        list.set_field(0, ExperienceField::Title, "kept".to_string());

        list.remove(1);

        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).unwrap().title, "kept");
    }

    #[test]
    fn test_date_only() {
        assert_eq!(date_only("2021-03-01T00:00:00.000Z"), "2021-03-01");
        assert_eq!(date_only("2021-03-01"), "2021-03-01");
        assert_eq!(date_only(""), "");
        // Malformed input passes through untouched.
        assert_eq!(date_only("not a date"), "not a date");
    }
}
