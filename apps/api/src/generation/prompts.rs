// Hard-coded review prompt templates.
// Six distinct styles so repeated generations do not read alike; one is
// chosen uniformly at random when the request carries no prompt of its own.

/// Style 1: enthusiastic — exclamatory, high energy.
pub const STYLE_ENTHUSIASTIC: &str = r#"Write an enthusiastic positive review of the beef hotpot restaurant, 120-180 words. Requirements:
1. Use exclamations and vivid adjectives to convey excitement
2. Emphasize how delightful and surprising the dining experience was
3. Describe what makes 2-3 signature dishes special
4. Express a strong desire to recommend the place to friends
5. Keep the language lively and infectious"#;

/// Style 2: detailed — multi-dimensional, reference-grade.
pub const STYLE_DETAILED: &str = r#"Write a detailed review of the beef hotpot restaurant, 150-200 words. Requirements:
1. Evaluate across several dimensions: ambience, service, dishes, value for money
2. Describe concrete details such as the decor, seating comfort, and background music
3. Comment knowledgeably on ingredient freshness, knife work, and plating
4. Mention specific touches from the staff (topping up the broth unprompted, explaining how to eat each cut)
5. Keep the tone objective and thorough so other diners can rely on it"#;

/// Style 3: concise — short and to the point.
pub const STYLE_CONCISE: &str = r#"Write a concise positive review of the beef hotpot restaurant, 80-120 words. Requirements:
1. Keep the language tight and direct
2. State the core strengths in as few words as possible
3. Highlight the 1-2 dishes most worth ordering
4. State clearly that you will come back
5. No padding, no rambling"#;

/// Style 4: professional critic — food-blogger register.
pub const STYLE_CRITIC: &str = r#"Write a professional review of the beef hotpot restaurant from a food blogger's perspective, 130-170 words. Requirements:
1. Use proper culinary vocabulary (texture layering, balance of flavors, and so on)
2. Contrast its strengths against comparable hotpot restaurants
3. Analyze how the broth is made and what characterizes its flavor
4. Judge the grade and freshness of the beef like a professional would
5. Close with suggestions for improvement and an overall rating"#;

/// Style 5: friend recommendation — conversational and personal.
pub const STYLE_FRIEND: &str = r#"Write a review of the beef hotpot restaurant in the voice of someone recommending it to a friend, 110-160 words. Requirements:
1. Use warm, natural, conversational language
2. Make it feel like privately sharing a food discovery
3. Lean into the "you have to try this" feeling
4. Share your personal favorite dishes and how you like to eat them
5. Tip them off about the best time to go or whether to book ahead"#;

/// Style 6: family dining — warm, practical for groups.
pub const STYLE_FAMILY: &str = r#"Write a review about taking the family to the beef hotpot restaurant, 140-190 words. Requirements:
1. Emphasize how family-friendly the restaurant is
2. Describe family-oriented services such as high chairs and family set menus
3. Note that the dishes suit family members of every age
4. Convey the warmth of a family gathering
5. Recommend seating areas or time slots that work well for families"#;

/// The full template set, indexed by the style selector.
pub const PROMPT_STYLES: [&str; 6] = [
    STYLE_ENTHUSIASTIC,
    STYLE_DETAILED,
    STYLE_CONCISE,
    STYLE_CRITIC,
    STYLE_FRIEND,
    STYLE_FAMILY,
];
