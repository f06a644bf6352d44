//! English UI strings

pub(super) const MESSAGES: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "Home"),
    ("nav.about", "About"),
    ("nav.services", "Services"),
    ("nav.pricing", "Pricing"),
    ("nav.faq", "FAQ"),
    ("nav.contact", "Contact"),
    ("nav.book_call", "Book a Call"),
    ("nav.open_menu", "Open menu"),
    ("nav.close_menu", "Close menu"),
    // Hero
    ("hero.badge", "E-commerce growth partner"),
    ("hero.title", "Scale your marketplace business with confidence"),
    ("hero.subtitle", "We help brands grow on Amazon and Etsy with strategy, operations and advertising that pay for themselves."),
    ("hero.cta_primary", "Get a free audit"),
    ("hero.cta_secondary", "See our services"),
    // Services
    ("services.title", "What we do"),
    ("services.amazon_title", "Amazon account management"),
    ("services.amazon_body", "Listings, advertising and inventory planning handled end to end."),
    ("services.etsy_title", "Etsy shop growth"),
    ("services.etsy_body", "Search optimisation and product photography that turn visits into orders."),
    ("services.consulting_title", "Strategy consulting"),
    ("services.consulting_body", "Market research and launch plans for new marketplaces."),
    // Pricing
    ("pricing.title", "Simple, transparent pricing"),
    ("pricing.subtitle", "Pick the plan that matches your stage."),
    ("pricing.monthly", "per month"),
    ("pricing.most_popular", "Most popular"),
    ("pricing.starter", "Starter"),
    ("pricing.growth", "Growth"),
    ("pricing.enterprise", "Enterprise"),
    ("pricing.contact_us", "Contact us"),
    // FAQ
    ("faq.title", "Frequently asked questions"),
    ("faq.subtitle", "Everything you need to know before working with us."),
    ("faq.category_all", "All"),
    ("faq.category_general", "General"),
    ("faq.category_amazon", "Amazon"),
    ("faq.category_etsy", "Etsy"),
    ("faq.category_pricing", "Pricing"),
    ("faq.empty", "No questions in this category yet."),
    ("faq.still_questions", "Still have questions? Get in touch."),
    // Contact form
    ("contact.title", "Let's talk about your store"),
    ("contact.name", "Full name"),
    ("contact.email", "Email address"),
    ("contact.company", "Company"),
    ("contact.message", "How can we help?"),
    ("contact.submit", "Send message"),
    ("contact.sending", "Sending..."),
    ("contact.success", "Thanks! We will get back to you within one business day."),
    ("contact.error", "Something went wrong. Please try again or email us directly."),
    // Newsletter
    ("newsletter.title", "Marketplace insights in your inbox"),
    ("newsletter.placeholder", "you@example.com"),
    ("newsletter.subscribe", "Subscribe"),
    ("newsletter.success", "You're subscribed. Welcome aboard!"),
    ("newsletter.error", "We couldn't subscribe you. Please try again."),
    // Cookie banner
    ("cookie.title", "We value your privacy"),
    ("cookie.message", "We use cookies to analyse traffic and improve your experience."),
    ("cookie.accept", "Accept"),
    ("cookie.decline", "Decline"),
    ("cookie.learn_more", "Learn more"),
    // Theme switcher
    ("theme.label", "Theme"),
    ("theme.light", "Light"),
    ("theme.dark", "Dark"),
    ("theme.system", "System"),
    ("theme.toggle", "Toggle theme"),
    // Language switcher
    ("language.label", "Language"),
    ("language.en", "English"),
    ("language.tr", "Türkçe"),
    // Footer
    ("footer.tagline", "Growth partner for marketplace sellers."),
    ("footer.privacy", "Privacy Policy"),
    ("footer.terms", "Terms of Service"),
    ("footer.cookies", "Cookie Policy"),
    ("footer.copyright", "© {year} Scalenty. All rights reserved."),
];
