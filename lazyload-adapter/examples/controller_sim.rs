// Example: two controllers sharing one host, each unsubscribing on its own.
use lazyload::sim::SimDocument;
use lazyload::LoaderOptions;
use lazyload_adapter::sim::SimEventHost;
use lazyload_adapter::{Controller, Signal};

fn main() -> Result<(), lazyload_adapter::Error> {
    let mut doc = SimDocument::new(800);
    let header = doc.append_image(0, "data-src", "logo.png");
    let gallery: Vec<_> = (1..=5)
        .map(|i| doc.append_image(i * 900, "data-src", &format!("photo-{i}.jpg")))
        .collect();

    let options = LoaderOptions::new().with_placeholder_attr("data-src");
    let mut host = SimEventHost::new();
    let mut top = Controller::new(&mut doc, [header], options.clone());
    let mut photos = Controller::new(&mut doc, gallery, options);

    top.start(&mut doc, &mut host)?;
    photos.start(&mut doc, &mut host)?;
    println!("top listening={} photos listening={}", top.is_listening(), photos.is_listening());

    let mut y = 0;
    while photos.is_listening() {
        y += 600;
        doc.scroll_to(y);
        let report = photos.on_signal(Signal::Scroll, &mut doc, &mut host);
        println!("scroll_y={y} revealed={} drained={}", report.revealed(), report.drained);
    }

    println!("host calls: {:?}", host.calls());
    Ok(())
}
