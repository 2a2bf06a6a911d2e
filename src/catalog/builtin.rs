//! The shipped tool catalog.

use super::{Catalog, ToolDescriptor};
use crate::error::CatalogError;
use crate::types::{InputSpec, ToolCategory};
use crate::utility::ThumbnailDownloader;

use ToolCategory::{Analyzer, Extractor, Generator};

const URL_PLACEHOLDER: &str = "https://youtube.com/watch?v=...";

/// Build and validate the built-in catalog.
pub fn builtin() -> Result<Catalog, CatalogError> {
    Catalog::new(descriptors())
}

fn video_url(label: &str) -> InputSpec {
    InputSpec::url("url", label).placeholder(URL_PLACEHOLDER)
}

fn descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::prompt(
            "ultimate-audit",
            "Ultimate Video Spy & SEO Auditor",
            Analyzer,
            "🕵️",
            "Get Full Details: Thumbnails, Metadata, Tags, & Deep SEO Score in one click.",
            vec![video_url("YouTube Video URL")],
            "You are the world's most advanced YouTube Algorithm Auditor.\n\
             The user has provided a YouTube Video URL. You must generate a \"Complete SEO Audit Report\".\n\
             \n\
             Perform the following steps strictly:\n\
             \n\
             1. **Video ID Extraction**: Extract the ID from the URL.\n\
             2. **Thumbnail Display**: Construct the Markdown image syntax for the max resolution thumbnail: \
             `![Thumbnail](https://img.youtube.com/vi/[VIDEO_ID]/maxresdefault.jpg)`. Display this at the top.\n\
             3. **Metadata Simulation**: Based on the context of the URL (if readable) or by simulating a typical \
             high-performing video structure, listing:\n   \
             - **Likely Title**\n   \
             - **Channel Name**\n   \
             - **Estimated Views**\n   \
             - **Upload Date**\n\
             4. **Tags Extraction**: List the top 20 optimized tags this video *should* be using (or is likely using) \
             for #1 ranking.\n\
             5. **Deep SEO Scoring**:\n   \
             - Give a \"Virality Score\" out of 100.\n   \
             - Analyze the Title CTR (Click-Through Rate) potential.\n   \
             - Analyze the Keyword Density.\n\
             6. **Actionable Advice**: Provide 3 specific things to improve to rank #1 on Google for this topic.\n\
             \n\
             Format the output using beautiful Markdown with headers, bold text, and bullet points. \
             Make it look like a premium software report.",
        ),
        // -- Generators ------------------------------------------------------
        ToolDescriptor::prompt(
            "ai-title",
            "AI Title Generator",
            Generator,
            "✨",
            "Generate 10 catchy, SEO-friendly YouTube titles.",
            vec![InputSpec::text("topic", "Video Topic").placeholder("e.g., How to bake a cake")],
            "You are a YouTube SEO Expert. Generate 10 high-CTR, SEO-optimized YouTube titles for the given topic.\n\
             Keep them under 60 characters where possible. Include the main keyword.\n\
             Format the output as a numbered list. Do not use markdown bolding for the titles themselves.",
        ),
        ToolDescriptor::prompt(
            "ai-keywords",
            "AI Keywords Generator",
            Generator,
            "🔑",
            "Generate 20-30 SEO keywords with search intent.",
            vec![
                InputSpec::multi_line("topic", "Video Topic").placeholder("Enter your video topic..."),
                InputSpec::choice(
                    "niche",
                    "Language/Niche",
                    &["English", "Hindi", "Hinglish", "Gaming", "Tech", "Vlog", "Other"],
                ),
            ],
            "Generate 25 SEO keywords (mix of short-tail and long-tail) for the provided topic and niche.\n\
             Format as a Markdown table with columns: Keyword, Search Intent (Info/Tutorial/Review), \
             Suggested Use (Title/Tags/Desc).",
        ),
        ToolDescriptor::prompt(
            "ai-tags",
            "AI YouTube Tag Generator",
            Generator,
            "🏷️",
            "Generate 25 optimized YouTube tags.",
            vec![InputSpec::multi_line("title", "Video Title/Topic").placeholder("e.g., iPhone 15 Review")],
            "Generate 25 high-ranking YouTube tags for the given video title. Ensure they are brand-safe.\n\
             Output two sections:\n\
             1. A comma-separated list of tags (easy to copy).\n\
             2. A bulleted list of the same tags.",
        ),
        ToolDescriptor::prompt(
            "ai-ideas",
            "AI YouTube Video Ideas",
            Generator,
            "💡",
            "Get 20 unique video ideas with angles.",
            vec![
                InputSpec::text("niche", "Channel Niche").placeholder("e.g., Personal Finance"),
                InputSpec::choice("difficulty", "Difficulty", &["Easy", "Medium", "Advanced"]),
            ],
            "Generate 20 unique YouTube video ideas for the specified niche and difficulty level.\n\
             For each idea, provide a catchy working title and a one-sentence \"Angle/Benefit\" \
             explaining why people will click.\n\
             Format as a list.",
        ),
        ToolDescriptor::prompt(
            "ai-content",
            "AI Content Generator",
            Generator,
            "📝",
            "Generate a detailed content outline.",
            vec![
                InputSpec::text("topic", "Video Topic").placeholder("e.g., 5 Tips for Weight Loss"),
                InputSpec::choice(
                    "length",
                    "Desired Length",
                    &["Short (3-4 mins)", "Medium (8-10 mins)", "Long (15+ mins)"],
                ),
            ],
            "Create a detailed video outline for the topic and length provided.\n\
             Include sections for: Hook/Intro, Main Talking Points (detailed bullets), \
             Engagement/CTA placements, and Outro.\n\
             Format clearly with Markdown headers.",
        ),
        ToolDescriptor::prompt(
            "ai-desc",
            "AI Description Generator",
            Generator,
            "📄",
            "Write an SEO-friendly 150-300 word description.",
            vec![
                InputSpec::text("title", "Video Title").placeholder("e.g., Best Budget Laptops 2025"),
                InputSpec::text("keywords", "Main Keywords (Optional)").placeholder("laptops, student, cheap"),
            ],
            "Write a professional, SEO-optimized YouTube video description (150-300 words).\n\
             Include the provided keywords naturally. Use short paragraphs.\n\
             Include a \"Timecodes\" placeholder section and a \"Links\" placeholder section.\n\
             Add 3 relevant hashtags at the end.",
        ),
        ToolDescriptor::prompt(
            "ai-script",
            "AI Video Script Generator",
            Generator,
            "📜",
            "Generate a full video script with timestamps.",
            vec![
                InputSpec::text("topic", "Topic/Title").placeholder("e.g., The History of AI"),
                InputSpec::choice(
                    "style",
                    "Tone/Style",
                    &["Educational", "Storytelling", "Funny", "Motivational"],
                ),
            ],
            "Write a complete YouTube video script for the given topic and tone.\n\
             Structure it with:\n\
             - [0:00] Hook (Very catchy)\n\
             - [0:45] Intro\n\
             - [Body Paragraphs broken down by sub-topic]\n\
             - [Outro & CTA]\n\
             Write in a conversational, spoken-word style.",
        ),
        ToolDescriptor::prompt(
            "ai-channel-name",
            "AI Channel Name Generator",
            Generator,
            "📺",
            "Get 20 unique channel name ideas.",
            vec![
                InputSpec::text("niche", "Channel Niche").placeholder("e.g., Vegan Cooking"),
                InputSpec::choice(
                    "tone",
                    "Tone",
                    &["Professional", "Fun", "Edgy", "Simple", "Memorable"],
                ),
            ],
            "Generate 20 unique, creative, and available-sounding YouTube channel names for the niche and tone.\n\
             Avoid generic names. Include a short 3-4 word tagline for each name.\n\
             Format as a numbered list.",
        ),
        // -- Extractors & utilities -----------------------------------------
        ToolDescriptor::prompt(
            "yt-details",
            "Video Details Extractor",
            Extractor,
            "👁️",
            "Extract title, description, and stats.",
            vec![video_url("YouTube Video URL")],
            "You cannot browse the live web, so do not claim to have fetched this video.\n\
             Infer the likely topic from the words and structure of the provided URL and produce an \
             optimized set of details for a video about that topic: title, description, category and \
             the stats a typical high-performing video of that kind would show.\n\
             Return the result as a single, well-formatted Markdown card.",
        ),
        ToolDescriptor::prompt(
            "yt-tags-ext",
            "Tags Extractor",
            Extractor,
            "📑",
            "Extract tags from a public video URL.",
            vec![video_url("YouTube Video URL")],
            "I cannot access the live YouTube API to fetch hidden tags.\n\
             However, based on the video ID or words in the URL provided, suggest the *most likely* \
             high-ranking tags that this video would be using.\n\
             Format as a comma-separated list.",
        ),
        ToolDescriptor::utility(
            "thumb-down",
            "Thumbnail Downloader",
            Extractor,
            "⬇️",
            "Get high-res thumbnail links.",
            vec![video_url("YouTube Video URL")],
            ThumbnailDownloader,
        ),
        ToolDescriptor::prompt(
            "thumb-resize",
            "Thumbnail Resizer",
            Extractor,
            "📐",
            "Resize images to YouTube standards.",
            vec![InputSpec::text("desc", "Upload unavailable in this view")
                .placeholder("Tool disabled in this view")
                .fixed("Client-side resizing disabled.")],
            "Explain the best dimensions for YouTube thumbnails (1280x720) and file size limits (2MB). \
             Provide a checklist for a high-converting thumbnail.",
        ),
        ToolDescriptor::prompt(
            "region-check",
            "Region Restriction Checker",
            Extractor,
            "🌍",
            "Check country availability.",
            vec![video_url("Video URL")],
            "Analyze the provided YouTube URL. Since I cannot query the live YouTube API for region restrictions,\n\
             provide a general guide on how to check restrictions manually (e.g. \"Music policies\")\n\
             and list common reasons why videos get blocked in specific regions (Copyright, Local Laws).",
        ),
        ToolDescriptor::prompt(
            "banner-down",
            "Channel Logic & Banner",
            Extractor,
            "🖼️",
            "Analyze channel branding.",
            vec![InputSpec::url("url", "Channel URL").placeholder("https://youtube.com/@channel")],
            "Based on the channel name/handle in the URL, suggest a critique of their likely branding strategy.\n\
             Explain how to retrieve the Banner image via \"View Source\" -> \"search for 'tvBanner'\".",
        ),
        ToolDescriptor::prompt(
            "playlist-calc",
            "Playlist Length Calculator",
            Extractor,
            "📊",
            "Calculate total watch time.",
            vec![InputSpec::url("url", "Playlist URL")
                .placeholder("https://youtube.com/playlist?list=...")],
            "I cannot fetch live playlist data. However, if you tell me the number of videos and \
             average length, I can calculate it.\n\
             \n\
             Please provide: \"Number of videos\" and \"Average duration\".",
        ),
        // -- Analysis & planning --------------------------------------------
        ToolDescriptor::prompt(
            "comp-analyze",
            "Competitor Video Analyzer",
            Analyzer,
            "📊",
            "Analyze competitor metadata and structure.",
            vec![
                InputSpec::url("url", "Competitor Video URL").placeholder("..."),
                InputSpec::multi_line("context", "What did they do well? (Optional observation)")
                    .placeholder("They have 1M views..."),
            ],
            "Act as a YouTube Analyst. Based on the provided URL (infer topic from it) and context, \
             provide a \"Competitor Analysis Report\".\n\
             Include:\n\
             1. Likely keywords they targeted.\n\
             2. Strengths of their probable title/thumbnail strategy.\n\
             3. Weaknesses/Gaps you can exploit.\n\
             4. A score out of 100.",
        ),
        ToolDescriptor::prompt(
            "hashtags",
            "Hashtag Generator",
            Analyzer,
            "#️⃣",
            "Generate relevant hashtags.",
            vec![InputSpec::text("topic", "Topic").placeholder("e.g. Gym workout")],
            "Generate 20 relevant, high-traffic hashtags for YouTube and Shorts based on the topic.\n\
             Include a mix of broad (#fitness) and specific (#legdayworkout).",
        ),
        ToolDescriptor::prompt(
            "hook-intro",
            "Video Hook & Intro Ideas",
            Analyzer,
            "🪝",
            "Generate powerful first 5 seconds.",
            vec![InputSpec::text("topic", "Video Topic").placeholder("e.g. Making Money Online")],
            "Write 10 powerful opening hooks (first 5 seconds) for a video about the topic.\n\
             Use techniques like: \"The unexpected result\", \"The bold claim\", \"The question\", \
             \"The negative warning\".",
        ),
        ToolDescriptor::prompt(
            "end-screen",
            "End Screen & CTA Ideas",
            Analyzer,
            "🎬",
            "Creative Outro and CTA lines.",
            vec![
                InputSpec::text("niche", "Niche").placeholder("e.g. Gaming"),
                InputSpec::choice(
                    "goal",
                    "Goal",
                    &["Subscribe", "Watch Next Video", "Visit Website"],
                ),
            ],
            "Generate 10 creative End Screen verbal calls-to-action (CTAs) for the niche and goal provided.\n\
             Make them feel natural and high-converting, not robotic.",
        ),
        ToolDescriptor::prompt(
            "upload-check",
            "Upload Checklist Generator",
            Analyzer,
            "✅",
            "Step-by-step upload checklist.",
            vec![InputSpec::choice(
                "type",
                "Video Type",
                &["Long Form", "Shorts", "Live Stream"],
            )],
            "Create a comprehensive step-by-step upload checklist for the provided video type.\n\
             Include Pre-upload (Thumbnail, File Name), Upload Flow (Title, Desc, Tags, Cards), \
             and Post-Publish (First Comment, Social Share).",
        ),
        ToolDescriptor::prompt(
            "shorts-opt",
            "Shorts Optimizer",
            Analyzer,
            "📱",
            "Titles and Descriptions for Shorts.",
            vec![InputSpec::text("idea", "Short Video Idea").placeholder("e.g. Cat jumping fail")],
            "Generate 10 ultra-short, punchy titles (under 40 chars) for a YouTube Short about the idea.\n\
             Also generate 3 compact descriptions with 3-4 hashtags each.",
        ),
        ToolDescriptor::prompt(
            "multi-lang",
            "Multi-language Title Translator",
            Analyzer,
            "🗣️",
            "Localize titles for global reach.",
            vec![
                InputSpec::text("title", "Original Title").placeholder("..."),
                InputSpec::text("languages", "Target Languages").placeholder("e.g. Hindi, Spanish, Arabic"),
            ],
            "Translate the YouTube title into the requested languages.\n\
             CRITICAL: Do not just translate literally. Localize it to be click-worthy and culturally \
             relevant in that language.\n\
             Format as a Markdown table.",
        ),
        ToolDescriptor::prompt(
            "comment-reply",
            "Comment Reply Generator",
            Analyzer,
            "💬",
            "Suggestions for viewer comments.",
            vec![
                InputSpec::multi_line("comment", "Viewer Comment").placeholder("Paste comment here..."),
                InputSpec::choice(
                    "tone",
                    "Reply Tone",
                    &["Friendly", "Funny", "Professional", "Short"],
                ),
            ],
            "Generate 5 varied reply suggestions for this viewer comment.\n\
             Adopt the requested tone. Keep replies engaging to encourage more comments.",
        ),
        ToolDescriptor::prompt(
            "content-cal",
            "Content Calendar Planner",
            Analyzer,
            "📅",
            "30-day content plan.",
            vec![
                InputSpec::text("niche", "Niche").placeholder("e.g. Gardening"),
                InputSpec::number("freq", "Videos Per Week").placeholder("3"),
            ],
            "Create a 30-day Content Calendar for a channel in the specified niche uploading the \
             specified times per week.\n\
             Format as a table with columns: Day, Video Idea, Format (Short/Long).\n\
             Ensure a good mix of content types.",
        ),
        ToolDescriptor::prompt(
            "thumb-ab",
            "Thumbnail A/B Idea Generator",
            Analyzer,
            "🅰️",
            "Generate variants for A/B testing.",
            vec![InputSpec::text("topic", "Video Topic").placeholder("...")],
            "Generate 5 \"Version A\" thumbnail ideas and 5 \"Version B\" thumbnail ideas for the topic.\n\
             Version A should be straightforward/descriptive. Version B should be curiosity-gap/emotional.\n\
             Describe the Visuals and Text Overlay for each.",
        ),
    ]
}
