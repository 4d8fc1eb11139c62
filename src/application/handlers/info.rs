//! Guild and user information

use crate::domain::entities::{Message, OutboundMessage, MAX_MESSAGE_LEN};

pub const MEMBER_LIST_TOO_LONG: &str = "La liste des membres est trop longue pour être affichée.";
pub const GUILD_ONLY: &str = "Cette commande n'est disponible que sur un serveur.";
pub const MENTION_REQUIRED: &str = "Veuillez mentionner un utilisateur.";
pub const NO_ROLES: &str = "Aucun rôle";

/// Guild summary with the member list, or a notice when the list does not fit
pub fn server_info(message: &Message) -> Vec<OutboundMessage> {
    let Some(guild) = &message.guild else {
        return vec![message.reply(GUILD_ONLY)];
    };

    let header = format!(
        "Serveur : {}\nCréé le : {}\nPropriétaire : {}\nMembres : {}\nListe des membres :\n",
        guild.name,
        guild.created_at.format("%d/%m/%Y"),
        guild.owner,
        guild.member_count
    );
    let members = guild.members.join(", ");

    let full = format!("{}{}", header, members);
    if full.chars().count() > MAX_MESSAGE_LEN {
        vec![message.reply(format!("{}{}", header, MEMBER_LIST_TOO_LONG))]
    } else {
        vec![message.reply(full)]
    }
}

/// Details of the first mentioned user
pub fn user_info(message: &Message) -> Vec<OutboundMessage> {
    let Some(user) = message.mentions.first() else {
        return vec![message.reply(MENTION_REQUIRED)];
    };

    let roles = user.role_names();
    let roles = if roles.is_empty() {
        NO_ROLES.to_string()
    } else {
        roles.join(", ")
    };

    let discriminator = match user.discriminator {
        Some(d) if d != 0 => format!("{:04}", d),
        _ => "0".to_string(),
    };

    let text = format!(
        "Nom d'utilisateur : {}\nDiscriminateur : {}\nID : {}\nCréé le : {}\nRôles : {}",
        user.name,
        discriminator,
        user.id,
        user.created_at.format("%d/%m/%Y à %H:%M:%S"),
        roles
    );
    vec![message.reply(text)]
}
