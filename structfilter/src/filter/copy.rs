//! Copying values between records of different shapes.

use crate::{diag::debug_event, record::DynRecord};

/// Copies every field of `source` into the field of `destination` with the
/// same name and the identical type.
///
/// Fields without a counterpart, or whose types differ, are skipped. Returns
/// the number of fields copied.
///
/// ```rust
/// use structfilter::{Record, copy_matching_fields};
///
/// #[derive(Clone, Debug, Default, Record)]
/// struct Draft { title: String, words: u32, notes: String }
///
/// #[derive(Clone, Debug, Default, Record)]
/// struct Published { title: String, words: u64 }
///
/// let draft = Draft { title: "Dune".into(), words: 188_000, notes: "tbd".into() };
/// let mut published = Published::default();
/// assert_eq!(copy_matching_fields(&draft, &mut published), 1);
/// assert_eq!(published.title, "Dune");
/// assert_eq!(published.words, 0);
/// ```
pub fn copy_matching_fields<S, D>(source: &S, destination: &mut D) -> usize
where
    S: DynRecord + ?Sized,
    D: DynRecord + ?Sized,
{
    let mut copied = 0;
    for name in source.record_type().field_names() {
        if let Some(value) = source.field(name)
            && destination.set_field(name, value)
        {
            copied += 1;
        }
    }
    debug_event!(
        source = source.record_type().name(),
        destination = destination.record_type().name(),
        copied,
        "copied matching fields"
    );
    copied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Record;

    #[derive(Clone, Debug, Default, Record)]
    struct Profile {
        name: String,
        age: i32,
        email: String,
    }

    #[derive(Clone, Debug, Default, Record)]
    struct Card {
        name: String,
        age: i64,
        avatar: Vec<u8>,
    }

    #[test]
    fn copies_only_same_name_same_type() {
        let profile = Profile {
            name: "ada".into(),
            age: 36,
            email: "ada@example.com".into(),
        };
        let mut card = Card {
            avatar: vec![1, 2],
            ..Card::default()
        };
        assert_eq!(copy_matching_fields(&profile, &mut card), 1);
        assert_eq!(card.name, "ada");
        assert_eq!(card.age, 0);
        assert_eq!(card.avatar, [1, 2]);
    }

    #[test]
    fn copying_into_the_same_type_copies_everything() {
        let source = Profile {
            name: "grace".into(),
            age: 85,
            email: "grace@example.com".into(),
        };
        let mut destination = Profile::default();
        assert_eq!(copy_matching_fields(&source, &mut destination), 3);
        assert_eq!(destination.email, source.email);
    }
}
