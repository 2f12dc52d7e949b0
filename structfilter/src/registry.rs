//! Operations on type-erased values.
//!
//! A [`Registry`] knows how to view an `&dyn Any` as a record for every type
//! registered with it. Each operation checks its input before doing any work:
//!
//! | input                                      | result                                  |
//! |--------------------------------------------|-----------------------------------------|
//! | `None`                                     | [`FilterError::NilSource`]              |
//! | a registered record                        | ok                                      |
//! | a `Box<dyn Any>` holding a registered record | ok                                    |
//! | a `Box<dyn Any>` holding anything else     | [`FilterError::NotAStruct`]             |
//! | anything else                              | [`FilterError::NotAPointerToStruct`]    |
//!
//! [`FilteredRecord`] is always registered.

use std::{
    any::{Any, TypeId},
    collections::{BTreeMap, HashMap},
    fmt,
};

use crate::{
    diag::debug_event,
    error::{FilterError, Result},
    filter::{self, NameCase},
    policy::{Policy, TagPolicy},
    record::{DynRecord, FilteredRecord, Record},
};

struct Accessor {
    name: &'static str,
    view: fn(&dyn Any) -> Option<&dyn DynRecord>,
    view_mut: fn(&mut dyn Any) -> Option<&mut dyn DynRecord>,
}

fn view<R: DynRecord>(value: &dyn Any) -> Option<&dyn DynRecord> {
    let record: &R = value.downcast_ref()?;
    Some(record)
}

fn view_mut<R: DynRecord>(value: &mut dyn Any) -> Option<&mut dyn DynRecord> {
    let record: &mut R = value.downcast_mut()?;
    Some(record)
}

/// A caller-owned set of record types that erased values may be viewed as.
///
/// ```rust
/// use structfilter::{FilterError, Record, Registry};
///
/// #[derive(Clone, Debug, Default, Record)]
/// struct Point { x: i32, y: i32 }
///
/// let registry = Registry::new().with::<Point>();
/// let point = Point { x: 1, y: 2 };
///
/// assert_eq!(registry.all_field_names(Some(&point)).unwrap(), ["x", "y"]);
/// assert_eq!(registry.all_field_names(Some(&7_u8)), Err(FilterError::NotAPointerToStruct));
/// assert_eq!(registry.all_field_names(None), Err(FilterError::NilSource));
/// ```
pub struct Registry {
    accessors: HashMap<TypeId, Accessor>,
}

impl Registry {
    /// Creates a registry that knows only [`FilteredRecord`].
    pub fn new() -> Self {
        let mut registry = Self {
            accessors: HashMap::new(),
        };
        registry.insert::<FilteredRecord>("FilteredRecord");
        registry
    }

    /// Registers `R`. Registering a type twice has no further effect.
    pub fn register<R: Record>(&mut self) -> &mut Self {
        self.insert::<R>(R::descriptor().name());
        self
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with<R: Record>(mut self) -> Self {
        self.register::<R>();
        self
    }

    fn insert<R: DynRecord>(&mut self, name: &'static str) {
        self.accessors.entry(TypeId::of::<R>()).or_insert(Accessor {
            name,
            view: view::<R>,
            view_mut: view_mut::<R>,
        });
    }

    pub fn is_registered<R: Any>(&self) -> bool {
        self.accessors.contains_key(&TypeId::of::<R>())
    }

    /// Whether `value`, or the value boxed inside it, is a registered record.
    pub fn contains(&self, value: &dyn Any) -> bool {
        self.resolve(Some(value)).is_ok()
    }

    pub fn len(&self) -> usize {
        self.accessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accessors.is_empty()
    }

    fn resolve<'a>(&self, value: Option<&'a dyn Any>) -> Result<&'a dyn DynRecord> {
        let value = value.ok_or(FilterError::NilSource)?;
        if let Some(accessor) = self.accessors.get(&(*value).type_id()) {
            return (accessor.view)(value).ok_or(FilterError::NotAPointerToStruct);
        }
        let Some(boxed) = value.downcast_ref::<Box<dyn Any>>() else {
            return Err(FilterError::NotAPointerToStruct);
        };
        let inner: &dyn Any = &**boxed;
        self.accessors
            .get(&(*inner).type_id())
            .and_then(|accessor| (accessor.view)(inner))
            .ok_or(FilterError::NotAStruct)
    }

    fn resolve_mut<'a>(&self, value: Option<&'a mut dyn Any>) -> Result<&'a mut dyn DynRecord> {
        let value = value.ok_or(FilterError::NilSource)?;
        if let Some(accessor) = self.accessors.get(&(*value).type_id()) {
            return (accessor.view_mut)(value).ok_or(FilterError::NotAPointerToStruct);
        }
        let Some(boxed) = value.downcast_mut::<Box<dyn Any>>() else {
            return Err(FilterError::NotAPointerToStruct);
        };
        let inner: &mut dyn Any = &mut **boxed;
        let type_id = (*inner).type_id();
        self.accessors
            .get(&type_id)
            .and_then(|accessor| (accessor.view_mut)(inner))
            .ok_or(FilterError::NotAStruct)
    }

    pub fn all_field_names(&self, source: Option<&dyn Any>) -> Result<Vec<&'static str>> {
        self.resolve(source).map(filter::all_field_names)
    }

    pub fn all_field_names_and_types(
        &self,
        source: Option<&dyn Any>,
    ) -> Result<BTreeMap<&'static str, &'static str>> {
        self.resolve(source).map(filter::all_field_names_and_types)
    }

    pub fn field_names_matching_policy(
        &self,
        source: Option<&dyn Any>,
        keep: &TagPolicy,
        case: NameCase,
    ) -> Result<Vec<String>> {
        let record = self.resolve(source)?;
        Ok(filter::field_names_matching_policy(record.record_type(), keep, case))
    }

    pub fn project_record(&self, source: Option<&dyn Any>, policy: &Policy) -> Result<FilteredRecord> {
        let record = self.resolve(source)?;
        Ok(filter::project_record(record, policy))
    }

    /// Returns a copy of `source` boxed as its concrete record type.
    pub fn copy_record(&self, source: Option<&dyn Any>) -> Result<Box<dyn Any>> {
        let record = self.resolve(source)?;
        Ok(filter::copy_dyn_record(record).into_any())
    }

    pub fn reset_fields_by_name<S: AsRef<str>>(
        &self,
        source: Option<&mut dyn Any>,
        names: &[S],
    ) -> Result<usize> {
        let record = self.resolve_mut(source)?;
        Ok(filter::reset_fields_by_name(record, names))
    }

    pub fn empty_filtered_fields(
        &self,
        source: Option<&dyn Any>,
        keep: &TagPolicy,
    ) -> Result<Box<dyn Any>> {
        let record = self.resolve(source)?;
        Ok(filter::empty_filtered_fields_dyn(record, keep).into_any())
    }

    /// Copies same-name, same-type fields from `source` into `destination`.
    ///
    /// `source` is checked first; `destination` is untouched when either
    /// check fails.
    pub fn copy_matching_fields(
        &self,
        source: Option<&dyn Any>,
        destination: Option<&mut dyn Any>,
    ) -> Result<usize> {
        let source = self.resolve(source)?;
        let destination = self.resolve_mut(destination)?;
        debug_event!(
            source = source.record_type().name(),
            destination = destination.record_type().name(),
            "copying through registry"
        );
        Ok(filter::copy_matching_fields(source, destination))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.accessors.values().map(|accessor| accessor.name).collect();
        names.sort_unstable();
        f.debug_struct("Registry").field("records", &names).finish()
    }
}
