//! Reply generation from analysis and listing statistics.
//!
//! Selection order: a non-neutral emotional state short-circuits to its
//! empathetic template, then the topical intent picks a template shaped by
//! the live listing statistics. Every numeric shown comes from the snapshot
//! as-is; the snapshot owns all rounding.

use kindbite_memory::Familiarity;

use crate::classify::{Complexity, EmotionalState, Intent, IntentAnalysis};
use crate::stats::ListingStats;

/// Coarse time-of-day bucket used by greeting templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    /// Bucket for a local hour: morning before 12, afternoon before 17,
    /// evening otherwise.
    pub fn from_hour(hour: u32) -> Self {
        if hour < 12 {
            TimeOfDay::Morning
        } else if hour < 17 {
            TimeOfDay::Afternoon
        } else {
            TimeOfDay::Evening
        }
    }

    /// Greeting word for this bucket.
    pub fn greeting(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Good morning",
            TimeOfDay::Afternoon => "Good afternoon",
            TimeOfDay::Evening => "Good evening",
        }
    }
}

const FRUSTRATED_REPLY: &str = "I can really sense your frustration, and I want you to know that I'm here to help make this better. Let's work through whatever's bothering you together. What's going on? I'll do everything I can to get this sorted out for you.";

const URGENT_REPLY: &str = "I can feel the urgency in your message, and I'm here to help you right now. Let me prioritize getting you exactly what you need as quickly as possible. What do you need? I'm focused on you.";

const SEEKING_HELP_REPLY: &str = "I can tell you need some guidance, and I'm absolutely here for you. Don't worry about being confused - that's totally normal! I'll walk you through everything step by step and make sure you feel comfortable. What would you like help with?";

const POSITIVE_REPLY: &str = "I love your positive energy! It's so great to see you excited about KindBite. I'm here to help you make the most of this experience. What can I do to keep that good vibe going?";

const NEGATIVE_REPLY: &str = "I can sense you're having a tough time, and I want you to know that I'm here to support you. Sometimes a good meal can really lift your spirits. Let me help you find something that might brighten your day. What sounds good to you?";

const NO_STOCK_SEARCH_REPLY: &str = "I know it's disappointing when there's no food available right now, but the good news is that new items get added throughout the day! I can help you set up notifications so you'll know as soon as something new arrives. Would you like me to do that?";

const NO_STOCK_RESERVE_REPLY: &str = "I wish I could help you reserve something right now, but there's no food available at the moment. New items get added throughout the day though! I can help you set up alerts for when new food arrives. Would you like me to do that?";

const PROFILE_REPLY: &str = "Your profile is your KindBite identity! You can:\n\u{2022} Upload a new profile picture\n\u{2022} Write a bio about yourself\n\u{2022} Set dietary preferences (vegetarian, vegan, etc.)\n\u{2022} Update your personal details\n\u{2022} Manage your account settings\n\nGo to Profile in the sidebar to make changes. I can help you with any specific updates you need!";

const POINTS_REPLY: &str = "I love that you're interested in points! You earn them by:\n\u{2022} Reserving food items\n\u{2022} Rating restaurants and food\n\u{2022} Being active on the app\n\u{2022} Helping reduce food waste\n\u{2022} Participating in the community\n\nCheck the Points section to see your current score. I can help you maximize your points and reach new levels!";

const APP_INFO_REPLY: &str = "KindBite is a food rescue platform that connects people with surplus food to reduce waste. We help restaurants share their extra food, and people like you can reserve it for free. It's good for you, good for the environment, and good for the community! I'm here to help you make the most of this amazing platform.";

const CAPABILITIES_REPLY: &str = "I'm your KindBite AI assistant, and I'm here to help you with everything! I can help you find delicious free food, make reservations, manage your profile, track your points, and guide you through the app. I'm pretty good at understanding what you need and giving helpful suggestions. What would you like to explore? I'm excited to help you!";

const PROBLEM_REPLY: &str = "I'm here to help solve any problems you're having! I want to make sure you have the best possible experience with KindBite. Let me know what's not working or what you need help with. I'll do everything I can to get it sorted out for you.";

const GENERAL_COMPLEX_REPLY: &str = "That's a really thoughtful question! I appreciate you taking the time to ask something detailed. Let me help you with that. I can assist you with food, reservations, profile, or points. What specifically do you need help with? I'll make sure you get a comprehensive answer that addresses everything you're wondering about.";

const GENERAL_SIMPLE_REPLY: &str = "I'm here to help you with anything KindBite-related! I can assist you with food, reservations, profile, or points. What do you need? I'm excited to help you get exactly what you're looking for.";

/// Static time-aware greeting emitted when a session opens.
pub fn welcome_message(time: TimeOfDay) -> String {
    format!(
        "{}! I'm your KindBite AI assistant. I can help you find food, make reservations, and navigate the app. What can I do for you?",
        time.greeting()
    )
}

/// Produce the reply for one analyzed turn.
///
/// Emotional state wins over intent; intent templates fold in the live
/// statistics; everything bottoms out in a general offer to help.
pub fn generate(
    analysis: &IntentAnalysis,
    stats: &ListingStats,
    time: TimeOfDay,
    familiarity: Familiarity,
) -> String {
    match analysis.emotional_state {
        EmotionalState::Frustrated => return FRUSTRATED_REPLY.to_string(),
        EmotionalState::Urgent => return URGENT_REPLY.to_string(),
        EmotionalState::SeekingHelp => return SEEKING_HELP_REPLY.to_string(),
        EmotionalState::Positive => return POSITIVE_REPLY.to_string(),
        EmotionalState::Negative => return NEGATIVE_REPLY.to_string(),
        EmotionalState::Neutral => {}
    }

    match analysis.primary_intent {
        Intent::Greeting => greeting_reply(stats, time, familiarity),
        Intent::FoodSearch => food_search_reply(stats),
        Intent::Reservation => reservation_reply(stats),
        Intent::Profile => PROFILE_REPLY.to_string(),
        Intent::Points => POINTS_REPLY.to_string(),
        Intent::Help => help_reply(stats),
        Intent::AppInfo => APP_INFO_REPLY.to_string(),
        Intent::Capabilities => CAPABILITIES_REPLY.to_string(),
        Intent::Recommendation => recommendation_reply(stats),
        Intent::DataQuery => data_query_reply(stats),
        Intent::FreeItems => free_items_reply(stats),
        Intent::Problem => PROBLEM_REPLY.to_string(),
        Intent::General => match analysis.complexity {
            Complexity::Complex => GENERAL_COMPLEX_REPLY.to_string(),
            Complexity::Simple => GENERAL_SIMPLE_REPLY.to_string(),
        },
    }
}

/// "N are completely free! " when anything is free, empty otherwise. The
/// trailing space keeps composed sentences single-spaced.
fn free_clause(stats: &ListingStats) -> String {
    if stats.free > 0 {
        format!("{} are completely free! ", stats.free)
    } else {
        String::new()
    }
}

fn greeting_reply(stats: &ListingStats, time: TimeOfDay, familiarity: Familiarity) -> String {
    let greeting = time.greeting();
    if familiarity.is_new() {
        return format!(
            "{greeting}! Welcome to KindBite! I'm so excited to help you discover amazing free food and make a positive impact. I can see {} delicious items available right now. {}What would you like to explore first?",
            stats.total,
            free_clause(stats)
        );
    }
    if stats.total > 0 {
        return format!(
            "{greeting}! Great to see you again! I have {} food items ready for you. {}What sounds good today? I'm here to help you find exactly what you're craving.",
            stats.total,
            free_clause(stats)
        );
    }
    format!(
        "{greeting}! Welcome to KindBite. I'm here to help you find food and make reservations. What can I do for you today?"
    )
}

fn food_search_reply(stats: &ListingStats) -> String {
    if stats.total == 0 {
        return NO_STOCK_SEARCH_REPLY.to_string();
    }

    let mut reply = format!("I found {} amazing food items for you! ", stats.total);
    if stats.free > 0 {
        reply.push_str(&format!(
            "{} are completely free - that's {}% of everything available! ",
            stats.free, stats.free_percentage
        ));
    }
    if let Some(top) = &stats.top_rated {
        reply.push_str(&format!(
            "The top-rated item is {} from {} ({}\u{2605}) - it's absolutely delicious! ",
            top.name, top.restaurant, top.rating
        ));
    }
    if !stats.categories.is_empty() {
        let shown: Vec<&str> = stats.categories.iter().take(3).map(String::as_str).collect();
        reply.push_str(&format!("I can see {} and more categories. ", shown.join(", ")));
    }
    if !stats.restaurants.is_empty() {
        reply.push_str(&format!("From {} different restaurants. ", stats.restaurants.len()));
    }
    if stats.avg_rating > 0.0 {
        reply.push_str(&format!(
            "Everything has an average rating of {}\u{2605}. ",
            stats.avg_rating_display()
        ));
    }
    reply.push_str("What type of food are you in the mood for? I'll help you find something perfect.");
    reply
}

fn reservation_reply(stats: &ListingStats) -> String {
    if stats.total == 0 {
        return NO_STOCK_RESERVE_REPLY.to_string();
    }
    format!(
        "I'd love to help you make a reservation! Here's how it works:\n1. Browse through the {} available items\n2. Tap on one that catches your eye\n3. Click \"Reserve Now\"\n4. Choose your pickup time\n5. Confirm and you're all set!\n\n{}What would you like to reserve? I'll guide you through the process.",
        stats.total,
        free_clause(stats)
    )
}

fn help_reply(stats: &ListingStats) -> String {
    format!(
        "I'm here to help you with everything KindBite has to offer:\n\u{2022} Finding food ({} items available)\n\u{2022} Making reservations\n\u{2022} Managing your profile\n\u{2022} Understanding points\n\u{2022} Using all the app features\n\u{2022} Navigating the platform\n\nWhat specifically do you need help with? I'll make sure you get the help you need and feel confident using the app.",
        stats.total
    )
}

fn recommendation_reply(stats: &ListingStats) -> String {
    if let Some(top) = &stats.top_rated {
        let availability = if top.is_free() {
            "completely free!"
        } else {
            "available now!"
        };
        return format!(
            "I'd absolutely recommend {} from {} ({}\u{2605})! It's the top-rated item and {} It's been getting amazing reviews. Would you like to reserve it? I can help you with that right now.",
            top.name, top.restaurant, top.rating, availability
        );
    }
    format!(
        "I can see {} items available. {}What type of food are you looking for? I'd love to help you find something that's perfect for you.",
        stats.total,
        free_clause(stats)
    )
}

fn data_query_reply(stats: &ListingStats) -> String {
    let shown: Vec<&str> = stats.categories.iter().take(4).map(String::as_str).collect();
    format!(
        "Here's what I can tell you about the current food situation:\n\u{2022} {} total items available\n\u{2022} {} are completely free ({}%)\n\u{2022} From {} different restaurants\n\u{2022} Average rating: {}\u{2605}\n\u{2022} Categories: {}\n\nWhat would you like to do with this information? I'm here to help you explore these options!",
        stats.total,
        stats.free,
        stats.free_percentage,
        stats.restaurants.len(),
        stats.avg_rating_display(),
        shown.join(", ")
    )
}

fn free_items_reply(stats: &ListingStats) -> String {
    format!(
        "This is amazing news! {} items are completely free - that's {}% of all available food! I love that you're interested in the free options. What would you like to try? I can help you reserve any of them right now.",
        stats.free, stats.free_percentage
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use kindbite_types::FoodListing;

    fn listing(name: &str, restaurant: &str, rating: f64, price: f64) -> FoodListing {
        FoodListing::new(name, restaurant, "Meals", rating, price)
    }

    fn stocked_stats() -> ListingStats {
        let mut listings = Vec::new();
        for i in 0..10 {
            let price = if i < 4 { 0.0 } else { 2.5 };
            listings.push(listing(&format!("Dish {i}"), "Green Fork", 4.0, price));
        }
        ListingStats::from_listings(&listings)
    }

    #[test]
    fn test_emotional_state_beats_intent() {
        let analysis = classify("I'm so frustrated, what food is available?");
        assert_eq!(analysis.emotional_state, EmotionalState::Frustrated);
        let reply = generate(
            &analysis,
            &stocked_stats(),
            TimeOfDay::Morning,
            Familiarity::New,
        );
        assert_eq!(reply, FRUSTRATED_REPLY);
    }

    #[test]
    fn test_greeting_with_empty_listings_reports_zero() {
        let analysis = classify("hi");
        let stats = ListingStats::from_listings(&[]);
        let reply = generate(&analysis, &stats, TimeOfDay::Evening, Familiarity::New);
        assert!(reply.starts_with("Good evening"));
        assert!(reply.contains("0 delicious items"));
        assert!(!reply.contains("completely free"));
    }

    #[test]
    fn test_greeting_returning_variant() {
        let analysis = classify("hello");
        let reply = generate(
            &analysis,
            &stocked_stats(),
            TimeOfDay::Morning,
            Familiarity::Returning,
        );
        assert!(reply.contains("Great to see you again"));
        assert!(reply.contains("10 food items"));
    }

    #[test]
    fn test_food_search_reports_counts() {
        let analysis = classify("what food is available?");
        let reply = generate(
            &analysis,
            &stocked_stats(),
            TimeOfDay::Afternoon,
            Familiarity::New,
        );
        assert!(reply.contains("10 amazing food items"));
        assert!(reply.contains("4 are completely free"));
        assert!(reply.contains("40%"));
        assert!(reply.contains("4.0\u{2605}"));
    }

    #[test]
    fn test_food_search_empty_is_apologetic() {
        let analysis = classify("i'm hungry");
        let stats = ListingStats::from_listings(&[]);
        let reply = generate(&analysis, &stats, TimeOfDay::Morning, Familiarity::New);
        assert_eq!(reply, NO_STOCK_SEARCH_REPLY);
    }

    #[test]
    fn test_reservation_with_no_stock() {
        let analysis = classify("I want to reserve something");
        assert_eq!(analysis.primary_intent, Intent::Reservation);
        let stats = ListingStats::from_listings(&[]);
        let reply = generate(&analysis, &stats, TimeOfDay::Morning, Familiarity::New);
        assert_eq!(reply, NO_STOCK_RESERVE_REPLY);
        assert!(!reply.contains("1."));
    }

    #[test]
    fn test_reservation_lists_steps_when_stocked() {
        let analysis = classify("i want to reserve something");
        let reply = generate(
            &analysis,
            &stocked_stats(),
            TimeOfDay::Morning,
            Familiarity::New,
        );
        assert!(reply.contains("1. Browse through the 10 available items"));
        assert!(reply.contains("5. Confirm"));
    }

    #[test]
    fn test_recommendation_without_top_rated_prompts_generically() {
        let analysis = classify("recommend me a dish");
        let stats = ListingStats::from_listings(&[]);
        let reply = generate(&analysis, &stats, TimeOfDay::Morning, Familiarity::New);
        assert!(reply.contains("0 items available"));
    }

    #[test]
    fn test_recommendation_pitches_top_rated() {
        let listings = vec![
            listing("Bagels", "Corner Bakery", 4.1, 0.0),
            listing("Sushi Box", "Umi", 4.8, 3.5),
        ];
        let stats = ListingStats::from_listings(&listings);
        let analysis = classify("recommend me a dish");
        let reply = generate(&analysis, &stats, TimeOfDay::Morning, Familiarity::New);
        assert!(reply.contains("Sushi Box"));
        assert!(reply.contains("Umi"));
        assert!(reply.contains("available now!"));
    }

    #[test]
    fn test_data_query_uses_preformatted_average() {
        let listings = vec![
            listing("A", "R1", 4.0, 0.0),
            listing("B", "R2", 4.5, 1.0),
            listing("C", "R3", 3.8, 1.0),
        ];
        let stats = ListingStats::from_listings(&listings);
        let analysis = classify("give me the statistics");
        let reply = generate(&analysis, &stats, TimeOfDay::Morning, Familiarity::New);
        assert!(reply.contains(&format!("Average rating: {}\u{2605}", stats.avg_rating_display())));
        assert!(reply.contains("1 are completely free (33%)"));
    }

    #[test]
    fn test_general_complexity_variants() {
        let simple = classify("okay");
        let complex = classify("okay so first this and then that plus another thing entirely");
        let stats = ListingStats::from_listings(&[]);
        assert_eq!(
            generate(&simple, &stats, TimeOfDay::Morning, Familiarity::New),
            GENERAL_SIMPLE_REPLY
        );
        assert_eq!(
            generate(&complex, &stats, TimeOfDay::Morning, Familiarity::New),
            GENERAL_COMPLEX_REPLY
        );
    }

    #[test]
    fn test_welcome_message_is_time_aware() {
        assert!(welcome_message(TimeOfDay::Morning).starts_with("Good morning"));
        assert!(welcome_message(TimeOfDay::Afternoon).starts_with("Good afternoon"));
        assert!(welcome_message(TimeOfDay::Evening).starts_with("Good evening"));
    }

    #[test]
    fn test_time_of_day_buckets() {
        assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(16), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(23), TimeOfDay::Evening);
    }
}
