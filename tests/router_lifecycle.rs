use std::sync::Arc;

use futures::executor::block_on;
use texivia_router_rs::platform::{CLICK_EVENT, POPSTATE_EVENT, Platform};
use texivia_router_rs::{
    Anchor, AnchorFlags, EventTarget, MemoryPlatform, PlatformEvent, RouteTemplate, Router,
    RouterError, RouterOptions,
};

type View = &'static str;

fn setup(url: &str) -> (Router<View>, Arc<MemoryPlatform<View>>) {
    let platform = Arc::new(MemoryPlatform::new(url).expect("valid url"));
    let router = Router::builder(platform.clone())
        .named("Home", RouteTemplate::new("/").view("home"))
        .named("About", RouteTemplate::new("/about").view("about"))
        .named("User", RouteTemplate::new("/users/{id:\\d+}").view("user"))
        .build()
        .expect("router should build");
    (router, platform)
}

fn click(anchor: Anchor) -> PlatformEvent {
    PlatformEvent::Click(Some(anchor))
}

#[test]
fn start_when_called_then_subscribes_three_listeners_and_resolves_current_url() {
    let (router, platform) = setup("http://localhost/users/5");
    let outcome = block_on(router.start()).expect("start should succeed");

    assert!(router.is_started());
    assert_eq!(platform.listener_count(), 3);
    assert_eq!(outcome.matched().and_then(|m| m.param("id")), Some("5"));
    assert!(platform.history().is_empty());
    assert_eq!(platform.event_count(), 1);
}

#[test]
fn start_when_already_started_then_already_started_error() {
    let (router, platform) = setup("http://localhost/");
    block_on(router.start()).expect("first start should succeed");
    match block_on(router.start()) {
        Err(RouterError::AlreadyStarted) => {}
        other => panic!("expected AlreadyStarted, got {other:?}"),
    }
    assert_eq!(platform.listener_count(), 3);
}

#[test]
fn stop_when_started_then_removes_exactly_its_listeners() {
    let (router, platform) = setup("http://localhost/");
    let foreign = Platform::<View>::add_event_listener(
        platform.as_ref(),
        EventTarget::Document,
        CLICK_EVENT,
        Arc::new(|_: &PlatformEvent| texivia_router_rs::platform::ListenerResponse::Ignored),
    );

    block_on(router.start()).unwrap();
    assert_eq!(platform.listener_count(), 4);
    router.stop();
    assert!(!router.is_started());
    assert_eq!(platform.listener_count(), 1);

    router.stop();
    Platform::<View>::remove_event_listener(platform.as_ref(), foreign);
    assert_eq!(platform.listener_count(), 0);
}

#[test]
fn stop_when_router_restarted_then_listeners_reattach() {
    let (router, platform) = setup("http://localhost/");
    block_on(router.start()).unwrap();
    router.stop();
    block_on(router.start()).expect("restart should succeed");
    assert_eq!(platform.listener_count(), 3);
}

#[test]
fn click_when_same_origin_anchor_then_prevented_and_navigates() {
    let (router, platform) = setup("http://localhost/");
    block_on(router.start()).unwrap();

    let outcome = platform.emit(
        EventTarget::Document,
        CLICK_EVENT,
        click(Anchor::new("http://localhost/users/9?x=1")),
    );
    assert!(block_on(outcome.settle()));

    let history = platform.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].url, "/users/9?x=1");
    assert_eq!(Platform::<View>::current_url(platform.as_ref()), "http://localhost/users/9?x=1");
    assert_eq!(platform.events().last().map(|e| e.detail.view), Some(Some("user")));
}

#[test]
fn click_when_anchor_opts_out_then_browser_keeps_it() {
    let (router, platform) = setup("http://localhost/");
    block_on(router.start()).unwrap();

    let ignored = [
        click(Anchor::new("http://localhost/about").with_flags(AnchorFlags::TARGET)),
        click(Anchor::new("http://localhost/about").with_flags(AnchorFlags::DOWNLOAD)),
        click(Anchor::new("http://localhost/about").with_flags(AnchorFlags::REL)),
        click(Anchor::new("http://localhost/about").with_flags(AnchorFlags::NO_ROUTER)),
        click(Anchor::new("https://other.example/about")),
        click(Anchor::new("http://localhost/#top").with_raw_href("#top")),
        PlatformEvent::Click(None),
    ];
    for event in ignored {
        let outcome = platform.emit(EventTarget::Document, CLICK_EVENT, event.clone());
        assert!(!outcome.prevented, "{event:?}");
    }
    assert!(platform.history().is_empty());
}

#[test]
fn goto_when_detail_given_then_navigates_with_history() {
    let (router, platform) = setup("http://localhost/");
    block_on(router.start()).unwrap();

    let outcome = platform.emit(
        EventTarget::Document,
        &router.options().goto_event_name,
        PlatformEvent::Custom {
            detail: Some("/about".to_string()),
        },
    );
    assert!(block_on(outcome.settle()));
    assert_eq!(platform.history()[0].url, "/about");

    let outcome = platform.emit(
        EventTarget::Document,
        "texivia.goto",
        PlatformEvent::Custom { detail: None },
    );
    assert!(!outcome.prevented);
}

#[test]
fn goto_when_event_name_configured_then_listens_on_that_name() {
    let platform = Arc::new(MemoryPlatform::<View>::new("http://localhost/").unwrap());
    let options = RouterOptions::builder()
        .event_name("app:navigated")
        .goto_event_name("app:goto")
        .build()
        .unwrap();
    let router = Router::builder(platform.clone())
        .options(options)
        .route(RouteTemplate::new("/"))
        .route(RouteTemplate::new("/about"))
        .build()
        .unwrap();
    block_on(router.start()).unwrap();

    let default_name = platform.emit(
        EventTarget::Document,
        "texivia.goto",
        PlatformEvent::Custom {
            detail: Some("/about".to_string()),
        },
    );
    assert!(!default_name.prevented);

    let outcome = platform.emit(
        EventTarget::Document,
        "app:goto",
        PlatformEvent::Custom {
            detail: Some("/about".to_string()),
        },
    );
    assert!(block_on(outcome.settle()));
    assert!(platform.events().iter().all(|e| e.name == "app:navigated"));
}

#[test]
fn popstate_when_history_steps_back_then_resolves_without_pushing() {
    let (router, platform) = setup("http://localhost/");
    block_on(router.start()).unwrap();
    block_on(router.navigate("/about", true)).unwrap();
    block_on(router.navigate("/users/3", true)).unwrap();

    let outcome = platform.back();
    assert_eq!(outcome.pending(), 1);
    block_on(outcome.settle());

    assert_eq!(platform.history().len(), 2);
    let last = platform.events().pop().expect("popstate should dispatch");
    assert_eq!(last.path(), "/about");
    assert_eq!(last.detail.view, Some("about"));
}

#[test]
fn events_when_router_stopped_then_ignored() {
    let (router, platform) = setup("http://localhost/");
    block_on(router.start()).unwrap();
    router.stop();

    let outcome = platform.emit(EventTarget::Document, CLICK_EVENT, click(Anchor::new("/about")));
    assert!(!outcome.prevented);
    let outcome = platform.emit(EventTarget::Window, POPSTATE_EVENT, PlatformEvent::PopState);
    assert!(!outcome.prevented);
}

#[test]
fn drop_when_router_started_then_listeners_released() {
    let (router, platform) = setup("http://localhost/");
    block_on(router.start()).unwrap();
    drop(router);
    assert_eq!(platform.listener_count(), 0);
}
