use structfilter::{DynRecord, Policy, Record, project_record};

#[derive(Clone, Debug, Default, Record)]
struct Heartbeat;

fn main() {
    let beat = Heartbeat;
    assert!(Heartbeat::descriptor().is_empty());
    assert!(beat.field("anything").is_none());
    assert!(project_record(&beat, &Policy::keeping([""])).is_empty());
}
