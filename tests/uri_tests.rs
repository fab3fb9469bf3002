use querybridge::uri::{UEntity, UResource, UUri, UriError};

fn door_rpc() -> UUri {
    UUri::local(
        UEntity::new("body.access").with_version(1),
        UResource::rpc("UpdateDoor"),
    )
}

#[test]
fn test_local_long_uri() {
    assert_eq!(door_rpc().to_long_uri(), "/body.access/1/rpc.UpdateDoor");
}

#[test]
fn test_remote_long_uri_with_message() {
    let uri = UUri::remote(
        "vcu.my_car",
        UEntity::new("body.access"),
        UResource::new("door")
            .with_instance("front_left")
            .with_message("Door"),
    );

    assert_eq!(uri.to_long_uri(), "//vcu.my_car/body.access//door.front_left#Door");
}

#[test]
fn test_parse_round_trips_canonical_form() {
    let inputs = [
        "/body.access/1/rpc.UpdateDoor",
        "//vcu.my_car/body.access//door.front_left#Door",
        "/hartley/3/rpc.response",
        "/hartley//status",
    ];

    for input in inputs {
        let uri: UUri = input.parse().unwrap();
        assert_eq!(uri.to_long_uri(), input);
    }
}

#[test]
fn test_parse_rejects_malformed_input() {
    assert_eq!("".parse::<UUri>(), Err(UriError::Empty));
    assert!(matches!("body.access/1/rpc.X".parse::<UUri>(), Err(UriError::Malformed(_))));
    assert!(matches!("/body.access/1".parse::<UUri>(), Err(UriError::Malformed(_))));
    assert!(matches!("///body.access/1/rpc.X".parse::<UUri>(), Err(UriError::Malformed(_))));
    assert_eq!(
        "/body.access/v1/rpc.X".parse::<UUri>(),
        Err(UriError::InvalidVersion("v1".to_string()))
    );
}

#[test]
fn test_is_rpc_method() {
    assert!(door_rpc().is_rpc_method());

    let response = door_rpc().rpc_response();
    assert_eq!(response.to_long_uri(), "/body.access/1/rpc.response");
    assert!(!response.is_rpc_method());

    let topic = UUri::local(UEntity::new("body.access"), UResource::new("door"));
    assert!(!topic.is_rpc_method());

    let bare_rpc = UUri::local(UEntity::new("body.access"), UResource::new("rpc"));
    assert!(!bare_rpc.is_rpc_method());
}
