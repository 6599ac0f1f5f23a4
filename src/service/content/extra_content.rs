use sea_orm::{DatabaseConnection, TransactionTrait};

use entity::extra_content::{BlockType, OwnerType};

use crate::{
    data::content::ExtraContentRepository,
    error::{content::ContentError, Error},
    model::content::{BlockCellDto, BlockDto, BlockGroupDto, SaveBlockDto},
    service::language::LanguageRegistry,
};

/// Ordered, typed, per-language content fragments for solutions and the
/// about page.
pub struct ExtraContentService<'a> {
    db: &'a DatabaseConnection,
    languages: &'a LanguageRegistry,
}

impl<'a> ExtraContentService<'a> {
    pub fn new(db: &'a DatabaseConnection, languages: &'a LanguageRegistry) -> Self {
        Self { db, languages }
    }

    pub async fn list(
        &self,
        owner_type: OwnerType,
        owner_id: i32,
        language: Option<&str>,
    ) -> Result<Vec<BlockDto>, Error> {
        if let Some(code) = language {
            self.languages.validate_code(code)?;
        }

        let blocks = ExtraContentRepository::new(self.db)
            .list_by_owner(owner_type, owner_id)
            .await?;

        Ok(blocks
            .into_iter()
            .filter(|block| language.is_none_or(|code| block.language == code))
            .map(to_dto)
            .collect())
    }

    /// The admin editor view: every language side by side, one row per
    /// logical content slot.
    pub async fn list_grouped(
        &self,
        owner_type: OwnerType,
        owner_id: i32,
    ) -> Result<Vec<BlockGroupDto>, Error> {
        let blocks = ExtraContentRepository::new(self.db)
            .list_by_owner(owner_type, owner_id)
            .await?;

        Ok(group_blocks(blocks, self.languages.codes()))
    }

    pub async fn add(
        &self,
        owner_type: OwnerType,
        owner_id: i32,
        dto: &SaveBlockDto,
    ) -> Result<BlockDto, Error> {
        self.languages.validate_code(&dto.language)?;
        let block_type = parse_block_type(&dto.block_type)?;
        validate_payload(block_type, &dto.payload)?;

        let repo = ExtraContentRepository::new(self.db);

        let position = match dto.position {
            Some(position) => position,
            None => repo
                .max_position(owner_type, owner_id)
                .await?
                .map_or(1, |max| max + 1),
        };

        let block = repo
            .insert(
                owner_type,
                owner_id,
                &dto.language,
                position,
                block_type,
                &dto.title,
                &dto.payload,
            )
            .await?;

        Ok(to_dto(block))
    }

    pub async fn update(&self, id: i32, dto: &SaveBlockDto) -> Result<BlockDto, Error> {
        let block_type = parse_block_type(&dto.block_type)?;
        validate_payload(block_type, &dto.payload)?;

        let repo = ExtraContentRepository::new(self.db);

        let block = repo.get_by_id(id).await?.ok_or(ContentError::NotFound {
            entity: "Content block",
            id,
        })?;

        let block = repo
            .update(block, block_type, &dto.title, &dto.payload)
            .await?;

        Ok(to_dto(block))
    }

    /// Deletes the rows of one editor row (one slot across all languages)
    /// in a single transaction.
    pub async fn delete_group(&self, ids: &[i32]) -> Result<u64, Error> {
        if ids.is_empty() {
            return Ok(0);
        }

        let txn = self.db.begin().await?;
        let removed = ExtraContentRepository::new(&txn).delete_by_ids(ids).await?;
        txn.commit().await?;

        Ok(removed)
    }
}

/// Buckets blocks by position, within a position by language, and zips
/// same-index entries across languages into display rows.
///
/// A position bucket produces as many rows as its longest language bucket;
/// languages with fewer blocks at that position get empty cells. Row order
/// is stable: ascending position, then bucket index, independent of which
/// languages are filled in.
pub fn group_blocks(
    blocks: Vec<entity::extra_content::Model>,
    languages: &[String],
) -> Vec<BlockGroupDto> {
    let mut positions: Vec<i32> = blocks.iter().map(|b| b.position).collect();
    positions.sort_unstable();
    positions.dedup();

    let mut groups = Vec::new();

    for position in positions {
        let buckets: Vec<Vec<&entity::extra_content::Model>> = languages
            .iter()
            .map(|language| {
                blocks
                    .iter()
                    .filter(|b| b.position == position && &b.language == language)
                    .collect()
            })
            .collect();

        let rows = buckets.iter().map(Vec::len).max().unwrap_or(0);

        for row in 0..rows {
            let cells = languages
                .iter()
                .zip(&buckets)
                .map(|(language, bucket)| BlockCellDto {
                    language: language.clone(),
                    block: bucket.get(row).map(|block| to_dto((*block).clone())),
                })
                .collect();

            groups.push(BlockGroupDto { position, cells });
        }
    }

    groups
}

pub(crate) fn parse_block_type(raw: &str) -> Result<BlockType, ContentError> {
    match raw {
        "text" => Ok(BlockType::Text),
        "table" => Ok(BlockType::Table),
        "list" => Ok(BlockType::List),
        "mixed" => Ok(BlockType::Mixed),
        other => Err(ContentError::UnknownBlockType(other.to_string())),
    }
}

pub(crate) fn block_type_label(block_type: BlockType) -> &'static str {
    match block_type {
        BlockType::Text => "text",
        BlockType::Table => "table",
        BlockType::List => "list",
        BlockType::Mixed => "mixed",
    }
}

/// Table and list payloads are JSON-encoded structures; text and mixed
/// blocks are stored as plain strings.
fn validate_payload(block_type: BlockType, payload: &str) -> Result<(), ContentError> {
    let label = match block_type {
        BlockType::Table => "table",
        BlockType::List => "list",
        BlockType::Text | BlockType::Mixed => return Ok(()),
    };

    serde_json::from_str::<serde_json::Value>(payload)
        .map(|_| ())
        .map_err(|_| ContentError::InvalidBlockPayload(label))
}

fn to_dto(block: entity::extra_content::Model) -> BlockDto {
    BlockDto {
        id: block.id,
        language: block.language,
        position: block.position,
        block_type: block_type_label(block.block_type).to_string(),
        title: block.title,
        payload: block.payload,
    }
}

#[cfg(test)]
mod tests {
    use entity::extra_content::{BlockType, OwnerType};

    use super::{group_blocks, parse_block_type};

    fn languages() -> Vec<String> {
        ["tr", "en", "de", "fr"].map(String::from).into()
    }

    fn block(id: i32, position: i32, language: &str) -> entity::extra_content::Model {
        entity::extra_content::Model {
            id,
            owner_type: OwnerType::Solution,
            owner_id: 1,
            language: language.to_string(),
            position,
            block_type: BlockType::Text,
            title: format!("title-{id}"),
            payload: "payload".to_string(),
        }
    }

    /// Two positions produce two rows, with blank cells where a language
    /// has no block
    #[test]
    fn groups_by_position_with_blank_cells() {
        let blocks = vec![block(1, 1, "tr"), block(2, 1, "en"), block(3, 2, "tr")];

        let groups = group_blocks(blocks, &languages());

        assert_eq!(groups.len(), 2);

        assert_eq!(groups[0].position, 1);
        assert!(groups[0].cells[0].block.is_some()); // tr
        assert!(groups[0].cells[1].block.is_some()); // en
        assert!(groups[0].cells[2].block.is_none()); // de
        assert!(groups[0].cells[3].block.is_none()); // fr

        assert_eq!(groups[1].position, 2);
        assert!(groups[1].cells[0].block.is_some());
        assert!(groups[1].cells[1].block.is_none());
    }

    /// A language with two blocks at one position forces a second row at
    /// that position, zipped by bucket index
    #[test]
    fn uneven_buckets_use_longest_length() {
        let blocks = vec![
            block(1, 3, "tr"),
            block(2, 3, "tr"),
            block(3, 3, "en"),
        ];

        let groups = group_blocks(blocks, &languages());

        assert_eq!(groups.len(), 2);

        let first = &groups[0];
        assert_eq!(first.cells[0].block.as_ref().unwrap().id, 1);
        assert_eq!(first.cells[1].block.as_ref().unwrap().id, 3);

        let second = &groups[1];
        assert_eq!(second.cells[0].block.as_ref().unwrap().id, 2);
        assert!(second.cells[1].block.is_none());
    }

    /// Cells always follow the configured language order
    #[test]
    fn cells_follow_configured_language_order() {
        let blocks = vec![block(1, 1, "fr"), block(2, 1, "tr")];

        let groups = group_blocks(blocks, &languages());

        let languages_in_row: Vec<&str> = groups[0]
            .cells
            .iter()
            .map(|cell| cell.language.as_str())
            .collect();

        assert_eq!(languages_in_row, ["tr", "en", "de", "fr"]);
        assert!(groups[0].cells[3].block.is_some());
    }

    /// No blocks, no rows
    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_blocks(Vec::new(), &languages()).is_empty());
    }

    #[test]
    fn unknown_block_type_is_rejected() {
        assert!(parse_block_type("video").is_err());
        assert!(parse_block_type("table").is_ok());
    }
}
