//! serenity models to domain entities

use chrono::{DateTime, Utc};
use serenity::cache::Cache;
use serenity::model::channel::Message as DiscordMessage;
use serenity::model::guild::{Guild as DiscordGuild, Role as DiscordRole};
use serenity::model::user::User as DiscordUser;
use serenity::model::Timestamp;

use crate::domain::entities::{Guild, Message, Role, User};

pub fn message(cache: &Cache, msg: &DiscordMessage) -> Message {
    let guild_ref = msg.guild(cache);
    let guild_data = guild_ref.as_deref();

    let mut message = Message::new(
        msg.channel_id.to_string(),
        user(&msg.author, guild_data),
        msg.content.clone(),
    )
    .with_id(msg.id.to_string())
    .with_mentions(msg.mentions.iter().map(|u| user(u, guild_data)).collect());

    if let Some(g) = guild_data {
        message = message.with_guild(guild(g));
    }
    message
}

fn to_utc(ts: Timestamp) -> DateTime<Utc> {
    DateTime::from_timestamp(ts.unix_timestamp(), 0).unwrap_or_default()
}

fn user(u: &DiscordUser, guild: Option<&DiscordGuild>) -> User {
    let mut user = User::new(u.id.to_string(), u.name.clone())
        .with_created_at(to_utc(u.id.created_at()))
        .with_roles(roles(u, guild));
    if let Some(d) = u.discriminator {
        user = user.with_discriminator(d.get());
    }
    user
}

/// Everyone role first, then the member's roles from lowest to highest
fn roles(u: &DiscordUser, guild: Option<&DiscordGuild>) -> Vec<Role> {
    let Some(guild) = guild else {
        return Vec::new();
    };

    let mut member_roles: Vec<&DiscordRole> = guild
        .members
        .get(&u.id)
        .map(|m| m.roles.iter().filter_map(|id| guild.roles.get(id)).collect())
        .unwrap_or_default();
    member_roles.sort_by_key(|r| r.position);

    std::iter::once(Role::everyone())
        .chain(
            member_roles
                .into_iter()
                .filter(|r| r.id.get() != guild.id.get())
                .map(|r| Role::new(r.name.clone())),
        )
        .collect()
}

fn guild(g: &DiscordGuild) -> Guild {
    let owner = g
        .members
        .get(&g.owner_id)
        .map(|m| user(&m.user, None).display_name())
        .unwrap_or_else(|| g.owner_id.to_string());

    Guild::new(g.id.to_string(), g.name.clone())
        .with_owner(owner)
        .with_created_at(to_utc(g.id.created_at()))
        .with_members(g.members.values().map(|m| m.user.name.clone()).collect())
        .with_member_count(g.member_count)
}
