mod host;

use std::time::Duration;

use image_slider::{ImageSlider, ImageSliderArgs, PressAction, Px};
use tokio::sync::mpsc;
use tracing::info;

use crate::host::{HostEvent, SimulatedViewport, TokioTimer, describe_buttons};

const IMAGES: [&str; 4] = [
    "https://placeimg.com/640/640/nature",
    "https://placeimg.com/640/640/people",
    "https://placeimg.com/640/640/animals",
    "https://placeimg.com/640/640/beer",
];

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,image_slider=debug,example=info")
        {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };
    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .try_init();
}

/// Feeds a scripted sequence of user input into the event channel.
fn script_user(events: mpsc::UnboundedSender<HostEvent>) {
    tokio::spawn(async move {
        let steps = [
            (Duration::from_millis(100), HostEvent::Layout(Px(360))),
            (
                Duration::from_millis(1500),
                HostEvent::Tap(PressAction::MoveTo {
                    index: 3,
                    animated: true,
                }),
            ),
            // Rotation to landscape.
            (Duration::from_millis(700), HostEvent::Layout(Px(780))),
            // Swipe back one slide.
            (Duration::from_millis(300), HostEvent::ScrollSettled(1560.0)),
            (Duration::from_millis(3000), HostEvent::Quit),
        ];
        for (delay, event) in steps {
            tokio::time::sleep(delay).await;
            if events.send(event).is_err() {
                return;
            }
        }
    });
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    let (sender, mut receiver) = mpsc::unbounded_channel();
    let args = ImageSliderArgs::default()
        .images(IMAGES)
        .looping(true)
        .auto_play_with_interval(Duration::from_secs(1))
        .on_position_changed(|position| info!(position, "position changed"))
        .on_press(|event| info!(index = ?event.index, image = ?event.image, "slide pressed"));

    let mut slider = ImageSlider::mount(
        args,
        SimulatedViewport::new(sender.clone()),
        TokioTimer::new(sender.clone()),
    );
    script_user(sender);

    while let Some(event) = receiver.recv().await {
        match event {
            HostEvent::Layout(width) => slider.on_layout(width),
            HostEvent::ScrollSettled(x) => slider.on_scroll_settle(x),
            HostEvent::Tick(id) => slider.on_autoplay_tick(id),
            HostEvent::Tap(action) => slider.dispatch(action),
            HostEvent::Quit => break,
        }
        let view = slider.render();
        info!(
            slides = view.slides.len(),
            scroll_enabled = view.scroll.scroll_enabled,
            "{}",
            describe_buttons(&view.buttons)
        );
    }

    slider.unmount();
    info!("done");
}
