use dioxus::prelude::*;
use dioxus_primitives::avatar as prim;

#[component]
pub fn Avatar(mut props: prim::AvatarProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "avatar", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Avatar { ..props }
    }
}

#[component]
pub fn AvatarFallback(mut props: prim::AvatarFallbackProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "avatar-fallback", None, false));

    rsx! {
        prim::AvatarFallback { ..props }
    }
}

/// Up to two uppercase initials taken from the words of `name`.
pub fn initials_of(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

/// Avatar showing the initials of `name`.
#[component]
pub fn InitialsAvatar(name: String) -> Element {
    let initials = initials_of(&name);
    rsx! {
        Avatar {
            AvatarFallback { "{initials}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials_of("Sarah Williams"), "SW");
        assert_eq!(initials_of("emily davis jones"), "ED");
        assert_eq!(initials_of("Admin"), "A");
        assert_eq!(initials_of("   "), "");
    }
}
