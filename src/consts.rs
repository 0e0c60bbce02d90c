/// Greeting keywords answered with [`MENU_REPLY`]
pub const GREETING_KEYWORDS: [&str; 2] = ["merhaba", "selam"];

/// Keywords asking for the vehicle list, answered with [`INVENTORY_REPLY`]
pub const INVENTORY_KEYWORDS: [&str; 2] = ["1", "araç"];

pub const MENU_REPLY: &str = "Merhaba! Cangıl Oto Galeri'ye hoş geldiniz. 🚗\n\n\
Size nasıl yardımcı olabilirim?\n\
1️⃣ Araç Listesi\n\
2️⃣ Konum ve İletişim";

pub const INVENTORY_REPLY: &str =
    "Şu an stoklarımızda SUV ve Sedan modellerimiz mevcut. 🏎️ Hangi tiple ilgileniyorsunuz?";

/// Header carrying the Kapso API key on outbound calls
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Header carrying the HMAC-SHA256 signature of inbound webhooks
pub const WEBHOOK_SIGNATURE_HEADER: &str = "X-Webhook-Signature";
