use super::*;

#[test]
fn review_path_encodes_the_service_segment() {
    assert_eq!(review_path("lko", "Water Supply"), "/review/lko/Water%20Supply");
    assert_eq!(review_path("del", "Roads"), "/review/del/Roads");
}

#[test]
fn review_path_round_trips_every_catalog_service() {
    for service in SERVICES {
        let path = review_path("lko", service.name);
        let segment = path.rsplit('/').next().unwrap();
        assert_eq!(urlencoding::decode(segment).unwrap(), service.name);
    }
}
