// Example: auto mode parks live sources at registration.
use lazyload::sim::SimDocument;
use lazyload::{Document, LazyLoader, LoaderOptions, Mode};

fn main() {
    let mut doc = SimDocument::new(600);
    let img = doc.append_image(3000, "src", "photo.jpg");
    let scope = doc.children().to_vec();

    let options = LoaderOptions::new().with_mode(Mode::Auto);
    let mut loader = LazyLoader::register(&mut doc, scope, options);
    println!(
        "after register: src={:?} placeholder={:?}",
        doc.attribute(&img, "src"),
        doc.attribute(&img, lazyload::DEFAULT_PLACEHOLDER_ATTR)
    );

    doc.scroll_to(2800);
    loader.scan_and_reveal(&mut doc);
    println!("after scroll: src={:?}", doc.attribute(&img, "src"));
}
