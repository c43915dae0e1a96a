use super::MediaItem;

/// Demo catalog shipped with the binary, used when no `--catalog` file is given.
pub fn items() -> Vec<MediaItem> {
    vec![
        // Cooking · instagram
        MediaItem::instagram("ig1", "Cooking", "https://www.instagram.com/p/DBoro_cyXas/")
            .titled("Cooking Inspiration"),
        MediaItem::instagram("ig2", "Cooking", "https://www.instagram.com/p/DDvC7LMoDCN/")
            .titled("Recipe Ideas"),
        MediaItem::instagram("ig3", "Cooking", "https://www.instagram.com/p/DLqJ2FZIZbp/")
            .titled("Food Photography"),
        MediaItem::instagram("ig4", "Cooking", "https://www.instagram.com/p/DB3rENOSiCO/")
            .titled("Culinary Tips"),
        // Cooking · tiktok
        MediaItem::tiktok(
            "tt1",
            "Cooking",
            "7460528404337610006",
            Some("https://www.tiktok.com/@tagesrezept/video/7460528404337610006"),
        )
        .titled("Tagesrezept Cooking"),
        MediaItem::tiktok(
            "tt2",
            "Cooking",
            "7453149126176394528",
            Some("https://www.tiktok.com/@chef_baeee/video/7453149126176394528"),
        )
        .titled("Chef Bae Recipes"),
        MediaItem::tiktok(
            "tt3",
            "Cooking",
            "7413528717877595397",
            Some("https://www.tiktok.com/@kennylsong/video/7413528717877595397"),
        )
        .titled("Kenny's Cooking"),
        MediaItem::tiktok(
            "tt4",
            "Cooking",
            "7223345377905331483",
            Some("https://www.tiktok.com/@cookwithay/video/7223345377905331483"),
        )
        .titled("Cook with Ay"),
        // Cooking · youtube
        MediaItem::youtube("yt1", "Cooking", "IHDX1eVP-_Q").titled("Bayashi TV Cooking"),
        MediaItem::youtube("yt2", "Cooking", "qFlw0h2-bDI").titled("Owen Han Recipes"),
        MediaItem::youtube("yt3", "Cooking", "xH8RaNpM854").titled("Home Chef Geoff"),
        MediaItem::youtube("yt4", "Cooking", "0lOM9PwLmHI").titled("Yumekenguru Cooking"),
        // Fashion · youtube
        MediaItem::youtube("yt_fashion_1", "Fashion", "ANpDbLtTxWA").titled("Fly With Johnny Thai Fashion"),
        MediaItem::youtube("yt_fashion_2", "Fashion", "M_A5xHe3HVU").titled("Streetwear, Lifestyles and Looks"),
        MediaItem::youtube("yt_fashion_3", "Fashion", "qzcfG9U4FjQ").titled("Lean Ortiz Style"),
        MediaItem::youtube("yt_fashion_4", "Fashion", "dkAY3qAYkyU").titled("Fashion Fixers"),
        // Fashion · instagram
        MediaItem::instagram("ig_fashion_1", "Fashion", "https://www.instagram.com/p/DD0aB4xyfc-/")
            .titled("Fashion Inspiration"),
        MediaItem::instagram("ig_fashion_2", "Fashion", "https://www.instagram.com/p/C7SYAxHJWxQ/")
            .titled("Style Guide"),
        MediaItem::instagram("ig_fashion_3", "Fashion", "https://www.instagram.com/p/DHaoqFSRdyQ/")
            .titled("Fashion Trends"),
        MediaItem::instagram("ig_fashion_4", "Fashion", "https://www.instagram.com/p/DM3Yi4tBvBa/")
            .titled("Outfit Ideas"),
        // Fashion · tiktok
        MediaItem::tiktok(
            "tt_fashion_1",
            "Fashion",
            "7309834149840391432",
            Some("https://www.tiktok.com/@jann.outfits/video/7309834149840391432?q=cool%20fashion%20man&t=1756077993746"),
        )
        .titled("Jann Outfits"),
        MediaItem::tiktok(
            "tt_fashion_2",
            "Fashion",
            "7496519391438228758",
            Some("https://www.tiktok.com/@streetfashion73/video/7496519391438228758"),
        )
        .titled("Street Fashion 73"),
        MediaItem::tiktok(
            "tt_fashion_3",
            "Fashion",
            "7333699162585730310",
            Some("https://www.tiktok.com/@kerina.wang/video/7333699162585730310"),
        )
        .titled("Kerina Wang Style"),
        MediaItem::tiktok(
            "tt_fashion_4",
            "Fashion",
            "7475043504608120069",
            Some("https://www.tiktok.com/@chic.outfi/video/7475043504608120069"),
        )
        .titled("Chic Outfi"),
        // Gaming · youtube
        MediaItem::youtube("yt_gaming_1", "Gaming", "flUB1nfGFYA").titled("Shah Enterprises Gaming"),
        MediaItem::youtube("yt_gaming_2", "Gaming", "xoiAz5CF4YI").titled("Chase After The Right Price"),
        MediaItem::youtube("yt_gaming_3", "Gaming", "2Zg8_cqNYrs").titled("Teamfight Tactics"),
        MediaItem::youtube("yt_gaming_4", "Gaming", "wEbG1kHrSoQ").titled("Game Facts"),
        // Gaming · instagram
        MediaItem::instagram("ig_gaming_1", "Gaming", "https://www.instagram.com/p/DEbAwvkyNmV/")
            .titled("Gaming Inspiration"),
        MediaItem::instagram("ig_gaming_2", "Gaming", "https://www.instagram.com/p/DI4yZ1fpwlP/")
            .titled("Gaming Content"),
        MediaItem::instagram("ig_gaming_3", "Gaming", "https://www.instagram.com/p/DExYs8GxTfG/")
            .titled("Gaming Tips"),
        MediaItem::instagram("ig_gaming_4", "Gaming", "https://www.instagram.com/p/DKIYk0PhjRx/")
            .titled("Gaming Strategy"),
        // Gaming · tiktok
        MediaItem::tiktok(
            "tt_gaming_1",
            "Gaming",
            "7398413070705511686",
            Some("https://www.tiktok.com/@inlighte/video/7398413070705511686"),
        )
        .titled("Inlighte Gaming"),
        MediaItem::tiktok(
            "tt_gaming_2",
            "Gaming",
            "7130169073979231494",
            Some("https://www.tiktok.com/@gamer/video/7130169073979231494"),
        )
        .titled("Gamer TikTok"),
        MediaItem::tiktok(
            "tt_gaming_3",
            "Gaming",
            "7541873467054951702",
            Some("https://www.tiktok.com/@wind.zone1/video/7541873467054951702"),
        )
        .titled("Wind Zone Gaming"),
        MediaItem::tiktok(
            "tt_gaming_4",
            "Gaming",
            "7521694239118331149",
            Some("https://www.tiktok.com/@jhf1589/video/7521694239118331149"),
        )
        .titled("JHF Gaming"),
    ]
}
