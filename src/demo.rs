//! Demo community used by `stylematch --demo`

use crate::{QuizAnswers, Result, SocialStore, UserId};

/// Ids of the seeded demo users
#[derive(Debug, Clone, Copy)]
pub struct DemoUsers {
    pub meghna: UserId,
    pub sarah: UserId,
    pub jeyasri: UserId,
    pub omar: UserId,
}

fn answers(
    styles: &[&str],
    colors: &[&str],
    seasons: &[&str],
    fits: &[&str],
    avoid: &[&str],
) -> QuizAnswers {
    let own = |xs: &[&str]| xs.iter().map(|x| x.to_string()).collect();
    QuizAnswers {
        styles: own(styles),
        colors: own(colors),
        seasons: own(seasons),
        fits: own(fits),
        avoid_types: own(avoid),
    }
}

/// Four users in two circles, their quizzes, four listings and a few follows
pub fn seed(store: &SocialStore) -> Result<DemoUsers> {
    let meghna = store.add_user("Meghna", "USYD")?;
    let sarah = store.add_user("Sarah", "USYD")?;
    let jeyasri = store.add_user("Jeyasri", "UNSW")?;
    let omar = store.add_user("Omar", "USYD")?;

    store.take_style_quiz(
        meghna,
        &answers(
            &["streetwear", "minimal"],
            &["blue", "black"],
            &["winter", "autumn"],
            &["oversized", "regular"],
            &["suit"],
        ),
    )?;
    store.take_style_quiz(
        sarah,
        &answers(&["streetwear", "y2k"], &["black"], &["winter"], &["oversized"], &[]),
    )?;
    store.take_style_quiz(
        jeyasri,
        &answers(&["formal", "preppy"], &["red", "cream"], &["summer"], &["slim"], &[]),
    )?;
    store.take_style_quiz(
        omar,
        &answers(&["sport", "casual"], &["grey", "navy"], &["autumn"], &["regular"], &[]),
    )?;

    store.add_listing(meghna, "Blue denim jacket", "casual streetwear cotton", "public")?;
    store.add_listing(sarah, "Black leather boots", "winter streetwear", "circle")?;
    store.add_listing(jeyasri, "Red silk dress", "formal evening satin", "public")?;
    store.add_listing(omar, "Grey hoodie", "sport casual hoodie", "circle")?;

    store.follow(meghna, sarah)?;
    store.follow(sarah, meghna)?;
    store.follow(meghna, omar)?;

    tracing::info!(
        users = store.user_count(),
        listings = store.listing_count(),
        "demo community seeded"
    );

    Ok(DemoUsers {
        meghna,
        sarah,
        jeyasri,
        omar,
    })
}
