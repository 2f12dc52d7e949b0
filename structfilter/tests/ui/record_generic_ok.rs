use std::marker::PhantomData;

use structfilter::{Policy, Record, project_record};

#[derive(Clone, Debug, Default)]
struct Item;

#[derive(Clone, Debug)]
struct NoDefault;

#[derive(Clone, Debug, Record)]
struct TypedId<T> {
    #[tags(filter = "public")]
    id: String,
    _marker: PhantomData<T>,
}

#[derive(Clone, Debug, Record)]
struct Page<T, const N: usize> {
    #[tags(filter = "public")]
    items: Vec<T>,
    cursor: [u8; N],
}

fn main() {
    let id: TypedId<NoDefault> = TypedId {
        id: "1".into(),
        _marker: PhantomData,
    };
    let view = project_record(&id, &Policy::keeping(["public"]));
    assert_eq!(view.get::<String>("id").map(String::as_str), Some("1"));

    let page: Page<Item, 4> = Page {
        items: vec![Item],
        cursor: [0; 4],
    };
    assert_eq!(project_record(&page, &Policy::keeping(["public"])).len(), 1);
    assert_eq!(
        Page::<Item, 4>::descriptor()
            .field("cursor")
            .map(|field| field.type_name()),
        Some("[u8; N]")
    );
}
