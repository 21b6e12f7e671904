use course_admin_client::{
    course::{Course, CourseUpdate},
    Client, Error, Token,
};
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::json;
use wiremock::{
    matchers::{body_json, header, header_exists, method, path},
    Mock, MockServer, ResponseTemplate,
};

/// The blocking client can't live inside the async runtime, so build and use it off-thread.
async fn with_client<T, F>(server: &MockServer, token: Option<&str>, f: F) -> T
where
    T: Send + 'static,
    F: FnOnce(Client) -> T + Send + 'static,
{
    let base = server.uri();
    let token = token.map(Token::from);
    tokio::task::spawn_blocking(move || f(Client::new(base, token).unwrap()))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_fetch_course() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/courses/abc"))
        .and(header("authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "course": {
                "_id": "abc",
                "title": "Rust",
                "description": "Ferris",
                "imageLink": "crab.png",
                "price": 9,
                "published": true,
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let course = with_client(&server, Some("secret"), |c| c.course("abc")).await;

    assert_eq!(
        course.unwrap(),
        Course {
            id: "abc".into(),
            title: "Rust".into(),
            description: "Ferris".into(),
            image_link: "crab.png".into(),
            price: "9".into(),
            published: Some(true),
        }
    );
}

#[tokio::test]
async fn test_list_courses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/courses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "courses": [
                { "_id": "a", "title": "One", "price": "1" },
                { "_id": "b", "title": "Two", "price": 2 },
            ]
        })))
        .mount(&server)
        .await;

    let courses = with_client(&server, Some("secret"), |c| c.courses())
        .await
        .unwrap();

    assert_eq!(
        courses.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
        vec!["a", "b"]
    );
    assert_eq!(courses[1].price, "2");
}

#[tokio::test]
async fn test_update_sends_full_record() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/admin/courses/abc"))
        .and(header("authorization", "Bearer secret"))
        .and(body_json(json!({
            "title": "T",
            "description": "D",
            "imageLink": "I",
            "published": true,
            "price": "9",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    let update = CourseUpdate {
        title: "T".into(),
        description: "D".into(),
        image_link: "I".into(),
        published: true,
        price: "9".into(),
    };
    let res = with_client(&server, Some("secret"), move |c| {
        c.update_course("abc", &update)
    })
    .await;

    assert!(res.is_ok());
}

#[tokio::test]
async fn test_server_error_is_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/admin/courses/abc"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let update = CourseUpdate {
        title: "T".into(),
        description: "D".into(),
        image_link: "I".into(),
        published: true,
        price: "9".into(),
    };
    let err = with_client(&server, Some("secret"), move |c| {
        c.update_course("abc", &update)
    })
    .await
    .unwrap_err();

    assert!(matches!(err, Error::Status(StatusCode::INTERNAL_SERVER_ERROR, _)));
    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
}

#[tokio::test]
async fn test_delete_returns_status() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/admin/courses/abc"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/admin/courses/xyz"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let (abc, xyz) = with_client(&server, Some("secret"), |c| {
        (c.delete_course("abc"), c.delete_course("xyz"))
    })
    .await;

    assert_eq!(abc.unwrap(), StatusCode::OK);
    assert_eq!(xyz.unwrap(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_no_token_sends_no_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/courses/abc"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/courses/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "course": { "_id": "abc" }
        })))
        .mount(&server)
        .await;

    let (has_token, course) =
        with_client(&server, None, |c| (c.has_token(), c.course("abc"))).await;

    assert!(!has_token);
    assert_eq!(course.unwrap().id, "abc");
}
