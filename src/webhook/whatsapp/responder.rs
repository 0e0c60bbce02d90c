//! # Reply Strategies
//!
//! A [`ReplyStrategy`] decides, for one inbound message, whether to answer and
//! with what text. The receiver and the dispatcher are shared; only the
//! strategy changes between the keyword bot and the echo bot.

use crate::{
    consts,
    errors::ConfigError,
    models::message::{InboundMessage, OutboundReply},
};
use derive_more::Display;
use std::str::FromStr;

/// Given an inbound message, produce zero or one reply.
pub trait ReplyStrategy {
    fn reply_to(&self, message: &InboundMessage) -> Option<OutboundReply>;
}

pub type ImplReplyStrategy = Box<dyn ReplyStrategy>;

/// Answers greetings with the menu and vehicle questions with the inventory.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordResponder;

impl ReplyStrategy for KeywordResponder {
    fn reply_to(&self, message: &InboundMessage) -> Option<OutboundReply> {
        if message.sender.is_empty() {
            return None;
        }

        let text = message.text.trim().to_lowercase();
        let contains_any = |keywords: &[&str]| keywords.iter().any(|kw| text.contains(kw));

        let body = if contains_any(&consts::GREETING_KEYWORDS) {
            consts::MENU_REPLY
        } else if contains_any(&consts::INVENTORY_KEYWORDS) {
            consts::INVENTORY_REPLY
        } else {
            return None;
        };

        Some(OutboundReply::new(message.sender.clone(), body))
    }
}

/// Sends every message back to its sender unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct EchoResponder;

impl ReplyStrategy for EchoResponder {
    fn reply_to(&self, message: &InboundMessage) -> Option<OutboundReply> {
        if message.sender.is_empty() {
            return None;
        }

        Some(OutboundReply::new(
            message.sender.clone(),
            message.text.clone(),
        ))
    }
}

/// Strategy selected through configuration
#[derive(Debug, Display, Clone, Copy, Default, PartialEq)]
pub enum ResponderKind {
    #[default]
    #[display("keyword")]
    Keyword,
    #[display("echo")]
    Echo,
}

impl ResponderKind {
    pub fn build(self) -> ImplReplyStrategy {
        match self {
            ResponderKind::Keyword => Box::new(KeywordResponder),
            ResponderKind::Echo => Box::new(EchoResponder),
        }
    }
}

impl FromStr for ResponderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keyword" => Ok(ResponderKind::Keyword),
            "echo" => Ok(ResponderKind::Echo),
            other => Err(ConfigError::UnknownResponder(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENDER: &str = "905551112233";

    fn inbound(text: &str) -> InboundMessage {
        InboundMessage {
            sender: SENDER.to_string(),
            text: text.to_string(),
        }
    }

    fn keyword_reply(text: &str) -> Option<String> {
        KeywordResponder.reply_to(&inbound(text)).map(|reply| {
            assert_eq!(reply.recipient, SENDER);
            reply.text
        })
    }

    #[test]
    fn test_greetings_get_the_menu() {
        for text in ["merhaba", "  MERHABA  ", "Selam!", "selamlar, araç var mı?"] {
            assert_eq!(keyword_reply(text).as_deref(), Some(consts::MENU_REPLY), "{text}");
        }
    }

    #[test]
    fn test_greeting_wins_over_inventory() {
        assert_eq!(
            keyword_reply("merhaba 1").as_deref(),
            Some(consts::MENU_REPLY)
        );
    }

    #[test]
    fn test_inventory_keywords_get_the_inventory() {
        for text in ["1", " 1 ", "araç", "ARAÇ listesi", "2021 model"] {
            assert_eq!(
                keyword_reply(text).as_deref(),
                Some(consts::INVENTORY_REPLY),
                "{text}"
            );
        }
    }

    #[test]
    fn test_unmatched_text_gets_no_reply() {
        for text in ["", "   ", "fiyat nedir?", "2", "arac"] {
            assert!(keyword_reply(text).is_none(), "{text}");
        }
    }

    #[test]
    fn test_echo_repeats_text_verbatim() {
        let reply = EchoResponder.reply_to(&inbound("test")).unwrap();
        assert_eq!(reply, OutboundReply::new(SENDER, "test"));

        let reply = EchoResponder.reply_to(&inbound("  Merhaba  ")).unwrap();
        assert_eq!(reply.text, "  Merhaba  ");

        let reply = EchoResponder.reply_to(&inbound("")).unwrap();
        assert_eq!(reply.text, "");
    }

    #[test]
    fn test_no_reply_without_sender() {
        let message = InboundMessage {
            sender: String::new(),
            text: "merhaba".into(),
        };

        assert!(KeywordResponder.reply_to(&message).is_none());
        assert!(EchoResponder.reply_to(&message).is_none());
    }

    #[test]
    fn test_responder_kind_parsing() {
        assert_eq!("keyword".parse::<ResponderKind>(), Ok(ResponderKind::Keyword));
        assert_eq!(" ECHO ".parse::<ResponderKind>(), Ok(ResponderKind::Echo));
        assert_eq!(
            "papagan".parse::<ResponderKind>(),
            Err(ConfigError::UnknownResponder("papagan".into()))
        );
        assert_eq!(ResponderKind::Echo.to_string(), "echo");
    }

    #[test]
    fn test_built_strategies_behave_like_their_kind() {
        let echo = ResponderKind::Echo.build();
        assert_eq!(echo.reply_to(&inbound("fiyat")).unwrap().text, "fiyat");

        let keyword = ResponderKind::Keyword.build();
        assert!(keyword.reply_to(&inbound("fiyat")).is_none());
    }
}
