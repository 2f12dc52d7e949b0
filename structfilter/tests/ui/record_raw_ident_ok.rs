use structfilter::{NameCase, Record, TagPolicy, field_names_matching_policy};

#[derive(Clone, Debug, Default, Record)]
struct Keyword {
    #[tags(r#type = "reserved")]
    r#type: String,
    r#match: bool,
}

fn main() {
    let names = field_names_matching_policy(
        Keyword::descriptor(),
        &TagPolicy::new().with("type", ["reserved"]),
        NameCase::Preserve,
    );
    assert_eq!(names, ["type"]);
    assert_eq!(Keyword::descriptor().name(), "Keyword");
    let _ = Keyword::default().r#match;
}
