use aboutme_ui::{DrawableRes, Locale, Resources, StringRes};

const NAME: &str = "Aleks Haecky";

const BIO_EN: &str = "Hi, my name is Aleks. I love fish. The kind on land and the kind in the \
sea. I also love hiking in the mountains, taking long walks on the beach, and reading \
anything that has a map at the front. When it rains I write small programs and tell myself \
that one day they will grow up to be big programs.";

const BIO_DE: &str = "Hallo, ich heiße Aleks. Ich liebe Fische, die an Land und die im Meer. \
Außerdem wandere ich gern in den Bergen, gehe lange am Strand spazieren und lese alles, \
was vorne eine Landkarte hat. Wenn es regnet, schreibe ich kleine Programme und sage mir, \
dass sie eines Tages groß werden.";

/// The resources bundled with the app. English is the default locale.
pub fn bundled() -> Resources {
    let en = Locale::new("en");
    Resources::builder(en.clone())
        .string(en.clone(), StringRes::Name, NAME)
        .string(en, StringRes::Bio, BIO_EN)
        .string(Locale::new("de"), StringRes::Bio, BIO_DE)
        .drawable(DrawableRes::BaselineStarBorder24, "baseline_star_border_24.xml")
        .build()
}
