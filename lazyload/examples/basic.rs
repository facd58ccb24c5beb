// Example: register a page, scroll through it, watch candidates reveal.
use lazyload::sim::{SimDocument, SimElement};
use lazyload::{DEFAULT_FRAGMENT_CLASS, Document, LazyLoader, LoaderOptions};

fn main() {
    let mut doc = SimDocument::new(800);
    let hero = doc.append_image(0, "data-src", "hero.png");
    let footer = doc.append_image(4200, "data-src", "footer.png");
    doc.append_fragment(2400, Some(DEFAULT_FRAGMENT_CLASS), "<section>comments</section>");

    let scope = doc.children().to_vec();
    let options = LoaderOptions::new()
        .with_placeholder_attr("data-src")
        .with_on_reveal(Some(|el: &SimElement| println!("revealed {el:?}")));
    let mut loader = LazyLoader::register(&mut doc, scope, options);

    for y in [0, 1000, 2000, 3000, 4000] {
        doc.scroll_to(y);
        let report = loader.scan_and_reveal(&mut doc);
        println!("scroll_y={y} report={report:?} state={:?}", loader.state());
    }

    println!("hero src={:?}", doc.attribute(&hero, "src"));
    println!("footer src={:?}", doc.attribute(&footer, "src"));
}
