//! Turkish UI strings

pub(super) const MESSAGES: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "Ana Sayfa"),
    ("nav.about", "Hakkımızda"),
    ("nav.services", "Hizmetler"),
    ("nav.pricing", "Fiyatlandırma"),
    ("nav.faq", "SSS"),
    ("nav.contact", "İletişim"),
    ("nav.book_call", "Görüşme Planla"),
    ("nav.open_menu", "Menüyü aç"),
    ("nav.close_menu", "Menüyü kapat"),
    // Hero
    ("hero.badge", "E-ticaret büyüme ortağınız"),
    ("hero.title", "Pazaryeri işinizi güvenle büyütün"),
    ("hero.subtitle", "Markaların Amazon ve Etsy'de büyümesine kendini amorti eden strateji, operasyon ve reklam ile yardımcı oluyoruz."),
    ("hero.cta_primary", "Ücretsiz analiz alın"),
    ("hero.cta_secondary", "Hizmetlerimizi görün"),
    // Services
    ("services.title", "Neler yapıyoruz"),
    ("services.amazon_title", "Amazon hesap yönetimi"),
    ("services.amazon_body", "Ürün sayfaları, reklamlar ve stok planlaması uçtan uca bizde."),
    ("services.etsy_title", "Etsy mağaza büyütme"),
    ("services.etsy_body", "Ziyaretleri siparişe dönüştüren arama optimizasyonu ve ürün fotoğrafçılığı."),
    ("services.consulting_title", "Strateji danışmanlığı"),
    ("services.consulting_body", "Yeni pazaryerleri için pazar araştırması ve lansman planları."),
    // Pricing
    ("pricing.title", "Basit ve şeffaf fiyatlandırma"),
    ("pricing.subtitle", "Bulunduğunuz aşamaya uygun planı seçin."),
    ("pricing.monthly", "aylık"),
    ("pricing.most_popular", "En popüler"),
    ("pricing.starter", "Başlangıç"),
    ("pricing.growth", "Büyüme"),
    ("pricing.enterprise", "Kurumsal"),
    ("pricing.contact_us", "Bize ulaşın"),
    // FAQ
    ("faq.title", "Sıkça sorulan sorular"),
    ("faq.subtitle", "Bizimle çalışmadan önce bilmeniz gereken her şey."),
    ("faq.category_all", "Tümü"),
    ("faq.category_general", "Genel"),
    ("faq.category_amazon", "Amazon"),
    ("faq.category_etsy", "Etsy"),
    ("faq.category_pricing", "Fiyatlandırma"),
    ("faq.empty", "Bu kategoride henüz soru yok."),
    ("faq.still_questions", "Hâlâ sorunuz mu var? Bize yazın."),
    // Contact form
    ("contact.title", "Mağazanız hakkında konuşalım"),
    ("contact.name", "Ad soyad"),
    ("contact.email", "E-posta adresi"),
    ("contact.company", "Şirket"),
    ("contact.message", "Size nasıl yardımcı olabiliriz?"),
    ("contact.submit", "Mesaj gönder"),
    ("contact.sending", "Gönderiliyor..."),
    ("contact.success", "Teşekkürler! Bir iş günü içinde size dönüş yapacağız."),
    ("contact.error", "Bir şeyler ters gitti. Lütfen tekrar deneyin veya bize doğrudan e-posta gönderin."),
    // Newsletter
    ("newsletter.title", "Pazaryeri içgörüleri e-postanızda"),
    ("newsletter.placeholder", "siz@ornek.com"),
    ("newsletter.subscribe", "Abone ol"),
    ("newsletter.success", "Abone oldunuz. Aramıza hoş geldiniz!"),
    ("newsletter.error", "Aboneliğiniz tamamlanamadı. Lütfen tekrar deneyin."),
    // Cookie banner
    ("cookie.title", "Gizliliğinize önem veriyoruz"),
    ("cookie.message", "Trafiği analiz etmek ve deneyiminizi iyileştirmek için çerezler kullanıyoruz."),
    ("cookie.accept", "Kabul et"),
    ("cookie.decline", "Reddet"),
    ("cookie.learn_more", "Daha fazla bilgi"),
    // Theme switcher
    ("theme.label", "Tema"),
    ("theme.light", "Açık"),
    ("theme.dark", "Koyu"),
    ("theme.system", "Sistem"),
    ("theme.toggle", "Temayı değiştir"),
    // Language switcher
    ("language.label", "Dil"),
    ("language.en", "English"),
    ("language.tr", "Türkçe"),
    // Footer
    ("footer.tagline", "Pazaryeri satıcılarının büyüme ortağı."),
    ("footer.privacy", "Gizlilik Politikası"),
    ("footer.terms", "Kullanım Koşulları"),
    ("footer.cookies", "Çerez Politikası"),
    ("footer.copyright", "© {year} Scalenty. Tüm hakları saklıdır."),
];
