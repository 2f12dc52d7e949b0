use structfilter::{Policy, Record, TagPolicy, empty_filtered_fields, project_record};

#[derive(Clone, Debug, Default, Record)]
struct Account {
    #[tags(filter = "public")]
    handle: String,
    #[tags(filter = "admin", audit = "pii")]
    email: String,
    #[tags(filter = "admin")]
    #[tags(retention = "30d")]
    last_seen: Option<u64>,
    balance: i64,
}

fn main() {
    let account = Account {
        handle: "ada".into(),
        email: "ada@example.com".into(),
        last_seen: Some(1),
        balance: 10,
    };
    let view = project_record(&account, &Policy::keeping(["public"]));
    assert_eq!(view.len(), 1);

    let emptied = empty_filtered_fields(&account, &TagPolicy::filter(["admin"]));
    assert_eq!(emptied.last_seen, None);
    assert_eq!(Account::descriptor().field("email").map(|f| f.tag("audit")), Some("pii"));
}
