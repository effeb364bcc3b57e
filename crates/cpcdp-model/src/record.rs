use crate::table::RuleTable;
use crate::value::FieldValue;

/// A CPCDP record instance.
///
/// Implementors hand out their type's rule table (built once and shared for
/// the life of the process) and a by-name accessor over their fields. Every
/// field declared in the table must be answered by [`Record::field`];
/// `None` means "no such field" and is a configuration defect, while an
/// unset value is [`FieldValue::Null`].
pub trait Record {
    fn rules(&self) -> &RuleTable;

    fn field(&self, name: &str) -> Option<FieldValue<'_>>;

    fn record_type(&self) -> &str {
        self.rules().name()
    }
}
