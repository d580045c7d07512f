//! Site footer: organization blurb, quick links, contact details, mission.

use leptos::prelude::*;

use crate::util::nav::NAV_LINKS;

pub const CONTACT_PHONE: &str = "+91 98765 43210";
pub const CONTACT_EMAIL: &str = "info@bastikipathshala.org";
pub const CONTACT_LOCATION: &str = "New Delhi, India";

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__col footer__col--org">
                    <a href="/" class="footer__brand">
                        <span aria-hidden="true">"📖"</span>
                        <span>"Basti Ki Pathshala"</span>
                    </a>
                    <p class="footer__text">
                        "Empowering communities through education. Building brighter futures, one child at a time."
                    </p>
                    <div class="footer__social">
                        <span title="Facebook">"Facebook"</span>
                        <span title="Twitter">"Twitter"</span>
                        <span title="Instagram">"Instagram"</span>
                    </div>
                </div>

                <div class="footer__col">
                    <h3 class="footer__heading">"Quick Links"</h3>
                    <ul class="footer__links">
                        {NAV_LINKS
                            .iter()
                            .map(|link| view! { <li><a href=link.href class="footer__link">{link.label}</a></li> })
                            .collect_view()}
                    </ul>
                </div>

                <div class="footer__col">
                    <h3 class="footer__heading">"Contact Us"</h3>
                    <ul class="footer__contact">
                        <li><span aria-hidden="true">"📞 "</span>{CONTACT_PHONE}</li>
                        <li><span aria-hidden="true">"✉ "</span>{CONTACT_EMAIL}</li>
                        <li><span aria-hidden="true">"📍 "</span>{CONTACT_LOCATION}</li>
                    </ul>
                </div>

                <div class="footer__col">
                    <h3 class="footer__heading">"Our Mission"</h3>
                    <p class="footer__text">
                        "To provide quality education and create opportunities for underprivileged children in our communities."
                    </p>
                </div>
            </div>

            <div class="footer__bottom">
                <p>"© 2025 Basti Ki Pathshala. All rights reserved. | Built with ❤️ for education"</p>
            </div>
        </footer>
    }
}
