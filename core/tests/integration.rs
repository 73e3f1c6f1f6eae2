//! Every client operation against the live mock server, plus the failure
//! modes that only a real socket can produce.
//!
//! # Design
//! Starts the mock server on a random port on a helper thread, then drives
//! `DogClient` over real HTTP through the default `UreqTransport`.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::time::Duration;

use dogapi::{DogApiError, DogClient, UreqTransport};

fn start_mock_server() -> SocketAddr {
    let std_listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn client(addr: SocketAddr) -> DogClient {
    DogClient::with_base_url(&format!("http://{addr}/api"))
}

#[test]
fn all_operations_against_mock_server() {
    let client = client(start_mock_server());

    // Step 1: breed listing.
    let breeds = client.breeds_list().unwrap();
    assert_eq!(breeds["hound"], vec!["afghan", "basset", "english"]);
    assert!(breeds["pug"].is_empty());

    // Step 2: random images from the whole collection.
    let url = client.random_image().unwrap();
    assert!(url.starts_with("https://images.dog.ceo/breeds/"));
    assert_eq!(client.multiple_random_images(3).unwrap().len(), 3);

    // Step 3: by breed, with padded names.
    let url = client.random_image_by_breed("  pug ").unwrap();
    assert!(url.contains("/breeds/pug/"));
    let images = client.multiple_random_images_by_breed("retriever", 4).unwrap();
    assert_eq!(images.len(), 4);
    assert!(images.iter().all(|u| u.contains("/breeds/retriever-")));
    assert_eq!(client.images_by_breed("hound").unwrap().len(), 9);

    // Step 4: by sub-breed.
    let url = client.random_image_by_sub_breed("hound", " afghan").unwrap();
    assert!(url.contains("/hound-afghan/"));
    let images = client.multiple_random_images_by_sub_breed("retriever", "golden", 2).unwrap();
    assert_eq!(images.len(), 2);
    let images = client.images_by_sub_breed("hound", "basset").unwrap();
    assert_eq!(images.len(), 3);

    // Step 5: sub-breed listings.
    assert_eq!(client.sub_breeds_list("retriever").unwrap(), vec!["curly", "golden"]);
    let err = client.sub_breeds_list("akita").unwrap_err();
    assert!(matches!(err, DogApiError::EmptySubBreeds));

    // Step 6: the service's 404 envelope becomes an Api error.
    let err = client.images_by_breed("wolf").unwrap_err();
    assert!(matches!(err, DogApiError::Api(_)));
    assert_eq!(err.to_string(), "Breed not found (main breed does not exist)");
    let err = client.random_image_by_sub_breed("hound", "wolf").unwrap_err();
    assert_eq!(err.to_string(), "Breed not found (sub breed does not exist)");
}

#[test]
fn count_above_limit_is_decoded_as_returned() {
    let client = client(start_mock_server());
    let images = client.multiple_random_images(75).unwrap();
    assert_eq!(images.len(), mock_server::MAX_IMAGES);
}

#[test]
fn unmatched_route_is_a_decode_error() {
    // axum answers unknown routes with an empty 404 body.
    let client = DogClient::with_base_url(&format!("http://{}/nowhere", start_mock_server()));
    let err = client.random_image().unwrap_err();
    assert!(matches!(err, DogApiError::Decode(_)));
}

#[test]
fn closed_port_is_a_transport_error() {
    let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
    let err = client(addr).random_image().unwrap_err();
    assert!(matches!(err, DogApiError::Transport(_)), "got {err:?}");
}

/// Answer one connection with `raw` bytes, then close it.
fn serve_once(raw: &'static [u8]) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = [0u8; 1024];
        let _ = stream.read(&mut buf);
        stream.write_all(raw).unwrap();
        stream.flush().unwrap();
    });

    addr
}

#[test]
fn truncated_body_is_a_read_error() {
    // Content-Length promises 100 bytes; the connection closes 90 short.
    let addr = serve_once(
        b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 100\r\n\r\n{\"status\":",
    );
    let err = client(addr).random_image().unwrap_err();
    assert!(matches!(err, DogApiError::Read(_)), "got {err:?}");
}

#[test]
fn non_utf8_body_is_a_decode_error() {
    let addr = serve_once(
        b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 11\r\nConnection: close\r\n\r\n\xff\xfe not json",
    );
    let err = client(addr).random_image().unwrap_err();
    assert!(matches!(err, DogApiError::Decode(_)), "got {err:?}");
}

#[test]
fn body_over_limit_is_a_read_error() {
    let addr = start_mock_server();
    let transport = UreqTransport::new().with_body_limit(16);
    let client = DogClient::with_transport(&format!("http://{addr}/api"), transport);
    let err = client.breeds_list().unwrap_err();
    assert!(matches!(err, DogApiError::Read(_)), "got {err:?}");
}

#[test]
fn caller_supplied_agent() {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .timeout_global(Some(Duration::from_secs(5)))
        .build()
        .new_agent();
    let client = DogClient::with_transport(
        &format!("http://{}/api", start_mock_server()),
        UreqTransport::with_agent(agent),
    );

    assert_eq!(client.sub_breeds_list("hound").unwrap(), vec!["afghan", "basset", "english"]);
    // The 404 error envelope still arrives as data.
    let err = client.sub_breeds_list("wolf").unwrap_err();
    assert_eq!(err.to_string(), "Breed not found (main breed does not exist)");
}
